//! Azure Storage signing: service SAS for a single blob and Shared Key
//! authorization for the container create call.

use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::upload::application::domain::entities::GrantPermissions;

pub(super) const SERVICE_VERSION: &str = "2022-11-02";

/// Fields of a blob service SAS that take part in the signature.
#[derive(Debug, Clone)]
pub(super) struct BlobSas<'a> {
    pub account: &'a str,
    pub container: &'a str,
    pub blob: &'a str,
    pub permissions: String,
    pub start: String,
    pub expiry: String,
    pub protocol: Option<&'a str>,
    pub content_type: &'a str,
}

impl BlobSas<'_> {
    /// String-to-sign for service SAS version 2020-12-06 and later.
    pub(super) fn string_to_sign(&self) -> String {
        let canonicalized_resource =
            format!("/blob/{}/{}/{}", self.account, self.container, self.blob);

        [
            self.permissions.as_str(),
            self.start.as_str(),
            self.expiry.as_str(),
            canonicalized_resource.as_str(),
            "", // signed identifier
            "", // signed ip
            self.protocol.unwrap_or(""),
            SERVICE_VERSION,
            "b", // signed resource: blob
            "", // snapshot time
            "", // encryption scope
            "", // rscc
            "", // rscd
            "", // rsce
            "", // rscl
            self.content_type,
        ]
        .join("\n")
    }

    /// Query pairs to append to the blob URL, `sig` last.
    pub(super) fn query_pairs(&self, key: &[u8]) -> Vec<(&'static str, String)> {
        let signature = sign(key, &self.string_to_sign());

        let mut pairs = vec![
            ("sv", SERVICE_VERSION.to_string()),
            ("st", self.start.clone()),
            ("se", self.expiry.clone()),
            ("sr", "b".to_string()),
            ("sp", self.permissions.clone()),
        ];
        if let Some(protocol) = self.protocol {
            pairs.push(("spr", protocol.to_string()));
        }
        pairs.push(("rsct", self.content_type.to_string()));
        pairs.push(("sig", signature));
        pairs
    }
}

/// Permission letters in the order the service requires.
pub(super) fn permission_letters(permissions: GrantPermissions) -> String {
    [
        (permissions.read, 'r'),
        (permissions.create, 'c'),
        (permissions.write, 'w'),
        (permissions.delete, 'd'),
        (permissions.list, 'l'),
    ]
    .iter()
    .filter(|(granted, _)| *granted)
    .map(|(_, letter)| *letter)
    .collect()
}

pub(super) fn sas_time(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub(super) fn x_ms_date(t: DateTime<Utc>) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Shared Key string-to-sign for `PUT {container}?restype=container`.
/// No body and no standard headers, so all twelve header lines are empty.
pub(super) fn create_container_string_to_sign(account: &str, path: &str, x_ms_date: &str) -> String {
    format!(
        "PUT\n{empty_headers}x-ms-date:{x_ms_date}\nx-ms-version:{SERVICE_VERSION}\n/{account}{path}\nrestype:container",
        empty_headers = "\n".repeat(11),
    )
}

pub(super) fn shared_key_authorization(account: &str, key: &[u8], string_to_sign: &str) -> String {
    format!("SharedKey {}:{}", account, sign(key, string_to_sign))
}

pub(super) fn sign(key: &[u8], string_to_sign: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key size");
    mac.update(string_to_sign.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const AZURITE_KEY: &str =
        "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

    fn key() -> Vec<u8> {
        base64::engine::general_purpose::STANDARD
            .decode(AZURITE_KEY)
            .unwrap()
    }

    fn sas(protocol: Option<&'static str>) -> BlobSas<'static> {
        BlobSas {
            account: "devstoreaccount1",
            container: "contest-photos",
            blob: "2025/03/abababababababababababababababab-my_photo.jpg",
            permissions: "cw".to_string(),
            start: "2025-03-01T11:59:00Z".to_string(),
            expiry: "2025-03-01T12:10:00Z".to_string(),
            protocol,
            content_type: "image/jpeg",
        }
    }

    #[test]
    fn sas_string_to_sign_has_sixteen_fields() {
        let s = sas(Some("https")).string_to_sign();

        assert_eq!(s.split('\n').count(), 16);
        assert_eq!(
            s,
            "cw\n2025-03-01T11:59:00Z\n2025-03-01T12:10:00Z\n\
             /blob/devstoreaccount1/contest-photos/2025/03/abababababababababababababababab-my_photo.jpg\n\
             \n\nhttps\n2022-11-02\nb\n\n\n\n\n\n\nimage/jpeg"
        );
    }

    #[test]
    fn sas_signature_matches_known_vector() {
        let pairs = sas(Some("https")).query_pairs(&key());
        let sig = pairs.iter().find(|(k, _)| *k == "sig").unwrap();
        assert_eq!(sig.1, "2BKN5wCcEju1xeN1XDOqHUnqQMXcD4jLKc43CFmS9mc=");

        let plain = sas(None).query_pairs(&key());
        let sig = plain.iter().find(|(k, _)| *k == "sig").unwrap();
        assert_eq!(sig.1, "YV3DH2G4QrecmiO++Fywk7w4f/GMRRL0g6VLxYENz8Y=");
        assert!(plain.iter().all(|(k, _)| *k != "spr"));
    }

    #[test]
    fn container_authorization_matches_known_vector() {
        let date = x_ms_date(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap());
        assert_eq!(date, "Sat, 01 Mar 2025 12:00:00 GMT");

        let to_sign = create_container_string_to_sign(
            "devstoreaccount1",
            "/devstoreaccount1/contest-photos",
            &date,
        );
        assert_eq!(
            shared_key_authorization("devstoreaccount1", &key(), &to_sign),
            "SharedKey devstoreaccount1:Xla0m6AvHHFA9pfBOPAgJWiNAbthE/vQdolYB8KzagI="
        );
    }

    #[test]
    fn permission_letters_follow_service_order() {
        assert_eq!(permission_letters(GrantPermissions::create_write()), "cw");

        let all = GrantPermissions {
            read: true,
            create: true,
            write: true,
            delete: true,
            list: true,
        };
        assert_eq!(permission_letters(all), "rcwdl");
    }

    #[test]
    fn sas_time_is_second_precision_utc() {
        let t = Utc.with_ymd_and_hms(2025, 12, 31, 23, 5, 9).unwrap();
        assert_eq!(sas_time(t), "2025-12-31T23:05:09Z");
    }
}
