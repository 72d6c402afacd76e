#![cfg(feature = "serde")]

use absolute_uri::AbsoluteUri;

#[test]
fn serialize_as_string() {
    let u: AbsoluteUri = "HTTP://Example.com:80/a/../b?#".parse().unwrap();
    assert_eq!(
        serde_json::to_string(&u).unwrap(),
        r#""http://example.com/b""#
    );
}

#[test]
fn deserialize_parses() {
    let u: AbsoluteUri = serde_json::from_str(r#""http://ドメイン名例.JP/""#).unwrap();
    assert_eq!(u.as_str(), "http://xn--eckwd4c7cu47r2wf.jp/");

    let v: Vec<AbsoluteUri> =
        serde_json::from_str(r#"["data:,x", "urn:a"]"#).unwrap();
    assert_eq!(v[0].as_str(), "data:,x");
    assert_eq!(v[1].as_str(), "urn:a");

    let e = serde_json::from_str::<AbsoluteUri>(r#""/relative""#).unwrap_err();
    assert!(e.to_string().contains("is not an absolute URL"));
    assert!(serde_json::from_str::<AbsoluteUri>("42").is_err());
}
