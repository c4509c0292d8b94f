use super::Msg;
use crate::chain::proto::cosmos::bank::v1beta1::MsgSend;
use crate::chain::proto::Coin;

/// Bank send of `amount` from `from_address` to `to_address`
pub fn send(from_address: &str, to_address: &str, amount: Vec<Coin>) -> Msg {
    Msg::Send(MsgSend {
        from_address: from_address.to_string(),
        to_address: to_address.to_string(),
        amount,
    })
}
