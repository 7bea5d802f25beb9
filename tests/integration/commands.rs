use anyhow::Result;
use secrecy::Secret;
use tempfile::tempdir;

use crate::test_utils::*;

use rnode_eth_sign::{commands, Error};
use rnode_eth_sign_core::{sign_personal_message, DeploySigned};

#[tokio::test]
async fn integration_commands_sign_verify() -> Result<()> {
    let dir = tempdir()?;
    let fields = write_json(&dir, "fields.json", &mock_fields())?;

    let key = Secret::new(format!("0x{}", "00".repeat(31) + "01"));
    let deploy = commands::sign(Some(key), fields).await?;
    assert_eq!(GENERATOR, deploy.deployer.to_string());

    let signed = write_json(&dir, "signed.json", &deploy)?;
    let output = commands::verify(signed).await?;
    assert!(output.valid);
    assert_eq!(deploy.deployer, output.deployer);
    Ok(())
}

#[tokio::test]
async fn integration_commands_verify_tampered() -> Result<()> {
    let dir = tempdir()?;
    let mut deploy = mock_deploy(&new_signing_key())?;
    deploy.fields.phlo_limit += 1;

    let signed = write_json(&dir, "signed.json", &deploy)?;
    let output = commands::verify(signed).await?;
    assert!(!output.valid);
    Ok(())
}

#[tokio::test]
async fn integration_commands_serialize() -> Result<()> {
    let dir = tempdir()?;
    let deploy = mock_deploy(&new_signing_key())?;
    let signed = write_json(&dir, "signed.json", &deploy)?;

    // Extra fields of a signed deploy are ignored.
    let output = commands::serialize(signed).await?;
    assert_eq!(0x12, output.bytes[0]);

    let missing = write_json(
        &dir,
        "missing.json",
        &serde_json::json!({ "term": "Nil" }),
    )?;
    let result = commands::serialize(missing).await;
    assert!(matches!(result, Err(Error::Json(_))));
    Ok(())
}

#[tokio::test]
async fn integration_commands_missing_input() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("absent.json");

    let result = commands::verify(file.clone()).await;
    assert!(matches!(result, Err(Error::NotFile(_))));

    let fields = write_json(&dir, "fields.json", &mock_fields())?;
    let result = commands::sign(None, fields).await;
    assert!(matches!(result, Err(Error::NoSigningKey(_))));
    Ok(())
}

#[tokio::test]
async fn integration_commands_malformed_sig() -> Result<()> {
    let dir = tempdir()?;
    let mut deploy = mock_deploy(&new_signing_key())?;
    deploy.sig.truncate(40);
    let signed = write_json(&dir, "signed.json", &deploy)?;

    let result = commands::verify(signed).await;
    match result {
        Err(Error::Core(e)) => assert!(e.is_malformed_input()),
        _ => panic!("expected malformed input"),
    }
    Ok(())
}

#[test]
fn integration_commands_recover() -> Result<()> {
    let signing_key = private_key_one()?;
    let signature = sign_personal_message(&signing_key, b"hello")?;

    let output =
        commands::recover("68656c6c6f", true, &signature.to_string())?;
    assert_eq!(GENERATOR, output.public_key.to_string());
    assert!(output
        .address
        .to_string()
        .to_lowercase()
        .ends_with(GENERATOR_ADDRESS));

    let hashed = commands::hash("hello", false)?;
    assert_eq!(hashed.hash, commands::hash("68656c6c6f", true)?.hash);
    Ok(())
}

#[test]
fn integration_commands_json_shape() -> Result<()> {
    let deploy = mock_deploy(&new_signing_key())?;
    let value = serde_json::to_value(&deploy)?;
    for key in [
        "term",
        "timestamp",
        "phloPrice",
        "phloLimit",
        "validAfterBlockNumber",
        "deployer",
        "sig",
    ] {
        assert!(value.get(key).is_some(), "missing {}", key);
    }
    let parsed: DeploySigned = serde_json::from_value(value)?;
    assert_eq!(deploy, parsed);
    Ok(())
}
