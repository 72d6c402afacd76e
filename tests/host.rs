use absolute_uri::{host, punycode, AbsoluteUri, DecodeError};

#[test]
fn decode_idn_hosts() {
    let cases = [
        ("http://ドメイン名例.JP:8080/", "xn--eckwd4c7cu47r2wf.jp", "ドメイン名例.jp"),
        (
            "http://日本語ドメイン名ＥＸＡＭＰＬＥ.JP/abc",
            "xn--example-6q4fyliikhk162btq3b2zd4y2o.jp",
            "日本語ドメイン名example.jp",
        ),
        ("http://abＡＢ12.JP/abc", "abab12.jp", "abab12.jp"),
        ("http://bücher.example/", "xn--bcher-kva.example", "bücher.example"),
    ];
    for (input, raw, decoded) in cases {
        let u: AbsoluteUri = input.parse().unwrap();
        assert_eq!(u.raw_host(), raw);
        assert_eq!(u.host().unwrap(), decoded);
    }
}

#[test]
fn decode_labels_unverified() {
    assert_eq!(
        host::decode_labels("www.xn--bcher-kva.example").unwrap(),
        "www.bücher.example"
    );
    assert_eq!(
        host::decode_labels("xn--z"),
        Err(DecodeError::TruncatedLabel { label: "z".into() })
    );
}

#[test]
fn opaque_host_mismatch() {
    let u: AbsoluteUri = "foo://xn--bcher-kva.example/".parse().unwrap();
    assert_eq!(u.raw_host(), "xn--bcher-kva.example");

    let e = u.host().unwrap_err();
    match &e {
        DecodeError::HostMismatch {
            raw,
            decoded,
            reencoded,
        } => {
            assert_eq!(raw, "xn--bcher-kva.example");
            assert_eq!(decoded, "bücher.example");
            assert_eq!(reencoded.as_deref(), Some("b%C3%BCcher.example"));
        }
        _ => panic!("unexpected error: {e:?}"),
    }
    assert!(e.to_string().contains("xn--bcher-kva.example"));
}

#[test]
fn punycode_public() {
    assert_eq!(punycode::decode("bcher-kva").unwrap(), "bücher");
    assert_eq!(
        punycode::decode("ihqwcrb4cv8a8dqg056pqjye").unwrap(),
        "他们为什么不说中文"
    );
    assert!(matches!(
        punycode::decode("bcher-k!a"),
        Err(DecodeError::InvalidDigit { digit: '!', .. })
    ));
}
