use prost::Message;
use prost_types::Timestamp;

use super::{Msg, MSG_SUBMIT_CLAIM_TYPE_URL};
use crate::chain::proto::cosmos::authz::v1beta1::{GenericAuthorization, Grant, MsgGrant, MsgRevoke};
use crate::chain::proto::Any;

pub const GENERIC_AUTHORIZATION_TYPE_URL: &str = "/cosmos.authz.v1beta1.GenericAuthorization";

/// `GenericAuthorization` permitting any message of `msg_type_url`
pub fn generic_authorization(msg_type_url: &str) -> Any {
    let auth = GenericAuthorization {
        msg: msg_type_url.to_string(),
    };
    Any {
        type_url: GENERIC_AUTHORIZATION_TYPE_URL.to_string(),
        value: auth.encode_to_vec(),
    }
}

/// Grant `authorization` from `granter` to `grantee`
pub fn grant(granter: &str, grantee: &str, authorization: Any, expiration: Option<Timestamp>) -> Msg {
    Msg::Grant(MsgGrant {
        granter: granter.to_string(),
        grantee: grantee.to_string(),
        grant: Some(Grant {
            authorization: Some(authorization),
            expiration,
        }),
    })
}

/// Non-expiring generic grant for one message type
pub fn grant_generic(granter: &str, grantee: &str, msg_type_url: &str) -> Msg {
    grant(granter, grantee, generic_authorization(msg_type_url), None)
}

/// Revoke whatever `granter` granted `grantee` for `msg_type_url`
pub fn revoke(granter: &str, grantee: &str, msg_type_url: &str) -> Msg {
    Msg::Revoke(MsgRevoke {
        granter: granter.to_string(),
        grantee: grantee.to_string(),
        msg_type_url: msg_type_url.to_string(),
    })
}

/// Let `grantee` submit participation claims on the granter's behalf, replacing
/// any previous grant. Revoke and grant go out in one transaction.
pub fn regrant_claim_authorization(granter: &str, grantee: &str) -> Vec<Msg> {
    vec![
        revoke(granter, grantee, MSG_SUBMIT_CLAIM_TYPE_URL),
        grant_generic(granter, grantee, MSG_SUBMIT_CLAIM_TYPE_URL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_grant() {
        match grant_generic("quick1granter", "quick1grantee", MSG_SUBMIT_CLAIM_TYPE_URL) {
            Msg::Grant(m) => {
                let auth = m.grant.unwrap().authorization.unwrap();
                assert_eq!(auth.type_url, GENERIC_AUTHORIZATION_TYPE_URL);
                let decoded = GenericAuthorization::decode(&auth.value[..]).unwrap();
                assert_eq!(decoded.msg, MSG_SUBMIT_CLAIM_TYPE_URL);
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_revoke_has_no_grant() {
        match revoke("quick1granter", "quick1grantee", MSG_SUBMIT_CLAIM_TYPE_URL) {
            Msg::Revoke(m) => assert_eq!(m.msg_type_url, MSG_SUBMIT_CLAIM_TYPE_URL),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_regrant_batch_order() {
        let batch = regrant_claim_authorization("quick1granter", "quick1grantee");
        assert_eq!(batch.len(), 2);
        assert!(matches!(batch[0], Msg::Revoke(_)));
        assert!(matches!(batch[1], Msg::Grant(_)));
    }
}
