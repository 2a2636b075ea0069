//! End-to-end tests against MSP-style layouts in a temp directory.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use fabric_wallet_core::KeyAlgorithm;
use fabric_wallet_local::{LocalWallet, Wallet, WalletConfig, WalletConfigBuilder, WalletError};
use ring::signature::{UnparsedPublicKey, ECDSA_P256_SHA256_ASN1};
use tempfile::TempDir;

const HOST: &str = "peer0.org1.example.com";
const TLS_CA: &str = "peers/peer0.org1.example.com/tls/ca.crt";
const SIGN_CERT: &str = "users/User1@org1.example.com/msp/signcerts/cert.pem";
const KEY_STORE: &str = "users/User1@org1.example.com/msp/keystore";

struct Fixture {
    dir: TempDir,
    ca_der: Vec<u8>,
    user_der: Vec<u8>,
    key: rcgen::KeyPair,
}

impl Fixture {
    /// A complete layout: TLS root CA, user certificate, one private key.
    fn new() -> Self {
        let dir = TempDir::new().unwrap();

        let ca_key = rcgen::KeyPair::generate().unwrap();
        let mut ca_params = rcgen::CertificateParams::new(Vec::<String>::new()).unwrap();
        ca_params
            .distinguished_name
            .push(rcgen::DnType::CommonName, "tlsca.org1.example.com");
        ca_params.is_ca = rcgen::IsCa::Ca(rcgen::BasicConstraints::Unconstrained);
        let ca = ca_params.self_signed(&ca_key).unwrap();

        let key = rcgen::KeyPair::generate().unwrap();
        let mut user_params = rcgen::CertificateParams::new(Vec::<String>::new()).unwrap();
        user_params
            .distinguished_name
            .push(rcgen::DnType::CommonName, "User1@org1.example.com");
        let user = user_params.self_signed(&key).unwrap();

        let fixture = Self {
            dir,
            ca_der: ca.der().to_vec(),
            user_der: user.der().to_vec(),
            key,
        };
        fixture.write(TLS_CA, ca.pem());
        fixture.write(SIGN_CERT, user.pem());
        fixture.write(&format!("{KEY_STORE}/priv_sk"), fixture.key.serialize_pem());
        fixture
    }

    fn base(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, rel: &str, contents: impl AsRef<[u8]>) {
        let path = self.base().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn config(&self) -> WalletConfigBuilder {
        WalletConfig::builder()
            .base_dir(self.base())
            .tls_folder("peers/peer0.org1.example.com/tls")
            .tls_root_ca_file("ca.crt")
            .tls_host_name(HOST)
            .key_store(KEY_STORE)
            .sign_identity(SIGN_CERT)
            .msp_id("Org1MSP")
    }

    fn wallet(&self) -> LocalWallet {
        LocalWallet::new(self.config().build().unwrap())
    }

    fn clear_key_store(&self) {
        let dir = self.base().join(KEY_STORE);
        fs::remove_dir_all(&dir).unwrap();
        fs::create_dir_all(&dir).unwrap();
    }
}

fn verifies(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    UnparsedPublicKey::new(&ECDSA_P256_SHA256_ASN1, public_key)
        .verify(message, signature)
        .is_ok()
}

#[test]
fn transport_credentials_pin_root_and_host() {
    let fixture = Fixture::new();
    let wallet = fixture.wallet();

    let first = wallet.transport_credentials().unwrap();
    let second = wallet.transport_credentials().unwrap();

    for creds in [&first, &second] {
        assert_eq!(creds.roots().len(), 1);
        assert_eq!(creds.root_certificate().der(), fixture.ca_der.as_slice());
        assert_eq!(creds.host_name(), HOST);
    }
    assert_eq!(first.root_certificate(), second.root_certificate());
    assert!(first.client_config().is_ok());
}

#[test]
fn identity_carries_configured_msp_id() {
    let fixture = Fixture::new();

    for msp_id in ["Org1MSP", "Org2MSP"] {
        let wallet = LocalWallet::new(fixture.config().msp_id(msp_id).build().unwrap());
        let identity = wallet.identity().unwrap();

        assert_eq!(identity.msp_id(), msp_id);
        assert_eq!(identity.certificate().der(), fixture.user_der.as_slice());
        assert!(identity.certificate().subject().contains("User1@org1.example.com"));
    }
}

#[test]
fn signer_signature_verifies_against_key() {
    let fixture = Fixture::new();
    let signer = fixture.wallet().signer().unwrap();

    assert_eq!(signer.algorithm(), KeyAlgorithm::EcdsaP256);
    assert_eq!(signer.public_key(), fixture.key.public_key_raw());

    let message = b"fixed proposal payload";
    let signature = signer.sign(message).unwrap();
    assert!(verifies(fixture.key.public_key_raw(), message, &signature));
}

#[test]
fn empty_key_store_is_reported_with_directory() {
    let fixture = Fixture::new();
    fixture.clear_key_store();

    let err = fixture.wallet().signer().unwrap_err();
    assert!(matches!(err, WalletError::EmptyKeyStore { .. }));
    assert_eq!(err.path(), Some(fixture.base().join(KEY_STORE).as_path()));
    assert!(err.to_string().starts_with("no files found in "));
}

#[test]
fn key_store_with_only_subdirectories_is_empty() {
    let fixture = Fixture::new();
    fixture.clear_key_store();
    fs::create_dir_all(fixture.base().join(KEY_STORE).join("archive")).unwrap();

    let err = fixture.wallet().signer().unwrap_err();
    assert!(matches!(err, WalletError::EmptyKeyStore { .. }));
}

#[test]
fn first_key_by_name_is_used() {
    let fixture = Fixture::new();
    fixture.clear_key_store();

    let keys: Vec<_> = (0..3).map(|_| rcgen::KeyPair::generate().unwrap()).collect();
    fixture.write(&format!("{KEY_STORE}/c_sk"), keys[2].serialize_pem());
    fixture.write(&format!("{KEY_STORE}/a_sk"), keys[0].serialize_pem());
    fixture.write(&format!("{KEY_STORE}/b_sk"), keys[1].serialize_pem());

    let wallet = fixture.wallet();
    assert!(wallet.key_file().unwrap().ends_with("a_sk"));

    let signer = wallet.signer().unwrap();
    assert_eq!(signer.public_key(), keys[0].public_key_raw());
}

#[cfg(unix)]
#[test]
fn symlinked_directories_in_key_store_are_ignored() {
    use std::os::unix::fs::symlink;

    // Kubernetes secret volume layout
    let fixture = Fixture::new();
    fixture.clear_key_store();
    let store = fixture.base().join(KEY_STORE);
    fixture.write(
        &format!("{KEY_STORE}/..2024_01_01_00_00_00.000/priv_sk"),
        fixture.key.serialize_pem(),
    );
    symlink("..2024_01_01_00_00_00.000", store.join("..data")).unwrap();
    symlink("..data/priv_sk", store.join("priv_sk")).unwrap();

    let wallet = fixture.wallet();
    assert!(wallet.key_file().unwrap().ends_with("priv_sk"));

    let signer = wallet.signer().unwrap();
    assert_eq!(signer.public_key(), fixture.key.public_key_raw());
}

#[test]
fn load_signer_reports_the_file_it_read() {
    let fixture = Fixture::new();
    let extra = rcgen::KeyPair::generate().unwrap();
    fixture.write(&format!("{KEY_STORE}/0_sk"), extra.serialize_pem());

    let (path, signer) = fixture.wallet().load_signer().unwrap();
    assert_eq!(path, fixture.base().join(KEY_STORE).join("0_sk"));
    assert_eq!(signer.public_key(), extra.public_key_raw());
}

#[test]
fn rewritten_key_is_picked_up() {
    let fixture = Fixture::new();
    let wallet = fixture.wallet();
    let before = wallet.signer().unwrap();

    let replacement = rcgen::KeyPair::generate().unwrap();
    fixture.write(&format!("{KEY_STORE}/priv_sk"), replacement.serialize_pem());

    let after = wallet.signer().unwrap();
    assert_ne!(before.public_key(), after.public_key());
    assert_eq!(after.public_key(), replacement.public_key_raw());
}

#[test]
fn malformed_identity_fails_alone() {
    let fixture = Fixture::new();
    fixture.write(SIGN_CERT, "definitely not PEM");
    let wallet = fixture.wallet();

    let err = wallet.identity().unwrap_err();
    assert!(matches!(err, WalletError::Parse { .. }));
    assert_eq!(err.path(), Some(fixture.base().join(SIGN_CERT).as_path()));

    assert!(wallet.transport_credentials().is_ok());
    assert!(wallet.signer().is_ok());
}

#[test]
fn malformed_tls_root_fails_alone() {
    let fixture = Fixture::new();
    fixture.write(TLS_CA, "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n");
    let wallet = fixture.wallet();

    let err = wallet.transport_credentials().unwrap_err();
    assert!(matches!(err, WalletError::Parse { .. }));

    assert!(wallet.identity().is_ok());
    assert!(wallet.signer().is_ok());
}

#[test]
fn malformed_key_fails_alone() {
    let fixture = Fixture::new();
    fixture.write(&format!("{KEY_STORE}/priv_sk"), "garbage");
    let wallet = fixture.wallet();

    let err = wallet.signer().unwrap_err();
    assert!(matches!(err, WalletError::Parse { .. }));

    assert!(wallet.transport_credentials().is_ok());
    assert!(wallet.identity().is_ok());
}

#[test]
fn missing_files_are_io_errors() {
    let fixture = Fixture::new();
    let wallet = LocalWallet::new(
        fixture
            .config()
            .tls_root_ca_file("missing.crt")
            .sign_identity("missing.pem")
            .key_store("missing-dir")
            .build()
            .unwrap(),
    );

    let err = wallet.transport_credentials().unwrap_err();
    assert!(matches!(err, WalletError::Io { .. }));
    assert!(err.path().unwrap().ends_with("missing.crt"));

    assert!(matches!(wallet.identity(), Err(WalletError::Io { .. })));
    assert!(matches!(wallet.signer(), Err(WalletError::Io { .. })));
}

#[test]
fn invalid_host_name_fails_transport_only() {
    let fixture = Fixture::new();
    let wallet = LocalWallet::new(fixture.config().tls_host_name("bad host").build().unwrap());

    assert!(matches!(
        wallet.transport_credentials(),
        Err(WalletError::InvalidServerName { .. })
    ));
    assert!(wallet.identity().is_ok());
}

#[test]
fn traversal_outside_base_is_rejected() {
    let fixture = Fixture::new();
    let wallet = LocalWallet::new(
        fixture
            .config()
            .sign_identity("../../../etc/passwd")
            .build()
            .unwrap(),
    );

    let err = wallet.identity().unwrap_err();
    assert!(matches!(err, WalletError::OutsideBaseDir { .. }));
}

#[test]
fn shared_wallet_serves_concurrent_callers() {
    let fixture = Fixture::new();
    let wallet: Arc<dyn Wallet> = Arc::new(fixture.wallet());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let wallet = Arc::clone(&wallet);
            let ca_der = fixture.ca_der.as_slice();
            scope.spawn(move || {
                let creds = wallet.transport_credentials().unwrap();
                assert_eq!(creds.root_certificate().der(), ca_der);
                assert_eq!(wallet.identity().unwrap().msp_id(), "Org1MSP");
                let sig = wallet.signer().unwrap().sign(b"msg").unwrap();
                assert!(!sig.is_empty());
            });
        }
    });
}
