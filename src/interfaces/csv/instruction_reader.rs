use crate::domain::instruction::Instruction;
use crate::error::{LedgerError, Result};
use std::io::Read;

/// Reads batch instructions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Instruction>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct InstructionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InstructionReader<R> {
    /// Creates a new `InstructionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes instructions,
    /// so large scripts stream without loading the whole file into memory.
    pub fn instructions(self) -> impl Iterator<Item = Result<Instruction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instruction::OpKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "op, account, counterparty, amount\nopen, alice, , 1000\ntransfer, alice, bob, 200";
        let reader = InstructionReader::new(data.as_bytes());
        let results: Vec<Result<Instruction>> = reader.instructions().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.op, OpKind::Open);
        assert_eq!(first.account, "alice");
        assert_eq!(first.amount, dec!(1000));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.op, OpKind::Transfer);
        assert_eq!(second.counterparty.as_deref(), Some("bob"));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "op, account, counterparty, amount\nbogus, alice, , 1.0";
        let reader = InstructionReader::new(data.as_bytes());
        let results: Vec<Result<Instruction>> = reader.instructions().collect();

        assert!(results[0].is_err());
    }
}
