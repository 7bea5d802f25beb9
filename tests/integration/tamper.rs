use anyhow::Result;

use crate::test_utils::*;

use rnode_eth_sign_core::{verify_deploy, DeployFields};

#[test]
fn integration_tamper_fields() -> Result<()> {
    let deploy = mock_deploy(&new_signing_key())?;
    assert!(verify_deploy(&deploy)?);

    let tampers: Vec<Box<dyn Fn(&mut DeployFields)>> = vec![
        Box::new(|f: &mut DeployFields| f.term.push(' ')),
        Box::new(|f: &mut DeployFields| f.timestamp += 1),
        Box::new(|f: &mut DeployFields| f.phlo_price += 1),
        Box::new(|f: &mut DeployFields| f.phlo_limit -= 1),
        Box::new(|f: &mut DeployFields| f.valid_after_block_number = 0),
    ];

    for tamper in tampers {
        let mut tampered = deploy.clone();
        tamper(&mut tampered.fields);
        assert_ne!(deploy.fields, tampered.fields);
        assert!(!verify_deploy(&tampered)?);
    }
    Ok(())
}

#[test]
fn integration_tamper_deployer() -> Result<()> {
    let deploy = mock_deploy(&new_signing_key())?;
    let other = mock_deploy(&new_signing_key())?;

    let mut tampered = deploy.clone();
    tampered.deployer = other.deployer;
    assert!(!verify_deploy(&tampered)?);

    // Signatures are not interchangeable between deployers.
    let mut swapped = deploy;
    swapped.sig = other.sig;
    assert!(!verify_deploy(&swapped)?);
    Ok(())
}
