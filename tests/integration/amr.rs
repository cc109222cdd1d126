// tests/integration/amr.rs

use amr_catalog::{AmrError, AuthenticationMethod, LookupMode};
use test_case::test_case;

#[test_case("face", AuthenticationMethod::Face)]
#[test_case("fpt", AuthenticationMethod::Fingerprint)]
#[test_case("geo", AuthenticationMethod::Geolocation)]
#[test_case("hwk", AuthenticationMethod::ProofOfPossession)]
#[test_case("iris", AuthenticationMethod::Iris)]
#[test_case("kba", AuthenticationMethod::Knowledge)]
#[test_case("mca", AuthenticationMethod::MultiChannel)]
#[test_case("mfa", AuthenticationMethod::MultiFactor)]
#[test_case("otp", AuthenticationMethod::OneTimePasscode)]
#[test_case("pin", AuthenticationMethod::Pin)]
#[test_case("pwd", AuthenticationMethod::Password)]
#[test_case("rba", AuthenticationMethod::Risk)]
#[test_case("retina", AuthenticationMethod::Retina)]
fn test_from_code(code: &str, expected: AuthenticationMethod) {
    assert_eq!(AuthenticationMethod::from_code(Some(code)), Ok(Some(expected)));
    assert_eq!(expected.code(), code);
}

#[test]
fn test_round_trip_all_methods() {
    for method in AuthenticationMethod::ALL {
        let resolved = AuthenticationMethod::from_code_with(Some(method.code()), LookupMode::Strict);
        assert_eq!(resolved, Ok(Some(method)));
    }
}

// Старый поиск отображал `ftp` (а не `fpt`) на отпечаток пальца.
// Канонический код — `fpt`; `ftp` принимается только в нестрогом режиме.
#[test]
fn test_legacy_fingerprint_alias() {
    assert_eq!(
        AuthenticationMethod::from_code(Some("ftp")),
        Ok(Some(AuthenticationMethod::Fingerprint))
    );
    assert_eq!(AuthenticationMethod::Fingerprint.code(), "fpt");
    assert_eq!(
        AuthenticationMethod::from_code_with(Some("ftp"), LookupMode::Strict),
        Err(AmrError::InvalidArgument("ftp".to_string()))
    );
}

#[test]
fn test_absent_code() {
    assert_eq!(AuthenticationMethod::from_code(None), Ok(None));
    assert_eq!(AuthenticationMethod::from_code(Some("")), Ok(None));
    assert_eq!(AuthenticationMethod::from_code_with(Some(" "), LookupMode::Strict), Ok(None));
}

#[test]
fn test_invalid_code() {
    let err = AuthenticationMethod::from_code(Some("invalid-xyz")).unwrap_err();
    assert!(matches!(err, AmrError::InvalidArgument(_)));
    assert!(err.to_string().contains("invalid-xyz"));
}

#[test]
fn test_retina() {
    let method = AuthenticationMethod::from_code(Some("retina")).unwrap().unwrap();
    assert_eq!(method, AuthenticationMethod::Retina);
    assert_eq!(method.code(), "retina");
    assert_eq!(method.label(), "Retina scan biometric");
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                AuthenticationMethod::ALL
                    .iter()
                    .all(|m| AuthenticationMethod::from_code(Some(m.code())) == Ok(Some(*m)))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
