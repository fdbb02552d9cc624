use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Open,
    Transfer,
}

/// One row of the batch instruction stream.
///
/// `open` creates `account` with `amount` as its opening balance; `transfer`
/// moves `amount` from `account` to `counterparty`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Instruction {
    pub op: OpKind,
    pub account: String,
    pub counterparty: Option<String>,
    pub amount: Decimal,
}
