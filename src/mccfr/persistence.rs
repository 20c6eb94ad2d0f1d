use super::regret::RegretNode;
use super::table::StrategyTable;
use anyhow::{bail, Context, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Write the byte-exact format from §6: a `u64` entry count, then per entry
/// a length-prefixed key, the action arity, and the arity-many `f64`
/// cumulative strategy weights. Regret is never serialized -- it is
/// training-run-local (§3) and always restarts at zero on load.
pub fn save<W: Write>(table: &StrategyTable, mut out: W) -> Result<()> {
    out.write_u64::<LittleEndian>(table.len() as u64)
        .context("writing entry count")?;
    for (key, node) in table.iter() {
        let key_bytes = key.as_bytes();
        out.write_u64::<LittleEndian>(key_bytes.len() as u64)
            .context("writing key length")?;
        out.write_all(key_bytes).context("writing key bytes")?;
        let arity = node.arity();
        out.write_u64::<LittleEndian>(arity as u64)
            .context("writing action arity")?;
        for &weight in node.strategy_sum() {
            out.write_f64::<LittleEndian>(weight)
                .context("writing strategy sum")?;
        }
    }
    Ok(())
}

/// Load a table written by `save`. Any bytes trailing the last node's
/// strategy vector are an error (§6).
pub fn load<R: Read>(mut input: R) -> Result<StrategyTable> {
    let num_entries = input.read_u64::<LittleEndian>().context("reading entry count")?;
    let mut table = StrategyTable::new();
    for _ in 0..num_entries {
        let key_length = input.read_u64::<LittleEndian>().context("reading key length")?;
        let mut key_bytes = vec![0u8; key_length as usize];
        input.read_exact(&mut key_bytes).context("reading key bytes")?;
        let key = String::from_utf8(key_bytes).context("key is not valid UTF-8")?;

        let arity = input.read_u64::<LittleEndian>().context("reading action arity")? as usize;
        let mut strategy_sum = Vec::with_capacity(arity);
        for _ in 0..arity {
            strategy_sum.push(input.read_f64::<LittleEndian>().context("reading strategy sum")?);
        }
        table.insert_restored(key, RegretNode::from_strategy_sum(strategy_sum));
    }

    let mut trailing = [0u8; 1];
    if input.read(&mut trailing).context("checking for trailing bytes")? != 0 {
        bail!("trailing bytes after the last persisted node");
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_average_strategy() {
        let mut table = StrategyTable::new();
        table.get_or_create("3|0|_|2", 2).unwrap().update_regret(0, 1.0);
        table.get_or_create("3|0|_|2", 2).unwrap().current_strategy(1.0);
        table.get_or_create("7|1|0X|3", 3).unwrap().current_strategy(1.0);

        let mut bytes = Vec::new();
        save(&table, &mut bytes).unwrap();
        let restored = load(&bytes[..]).unwrap();

        for (key, node) in table.iter() {
            assert_eq!(restored.average_strategy(key), Some(node.average_strategy()));
        }
    }

    #[test]
    fn save_of_loaded_table_is_byte_identical() {
        let mut table = StrategyTable::new();
        table.get_or_create("k", 2).unwrap().current_strategy(1.0);
        let mut original = Vec::new();
        save(&table, &mut original).unwrap();

        let restored = load(&original[..]).unwrap();
        let mut roundtripped = Vec::new();
        save(&restored, &mut roundtripped).unwrap();

        assert_eq!(original, roundtripped);
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut table = StrategyTable::new();
        table.get_or_create("k", 1);
        let mut bytes = Vec::new();
        save(&table, &mut bytes).unwrap();
        bytes.push(0xFF);
        assert!(load(&bytes[..]).is_err());
    }
}
