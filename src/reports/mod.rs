mod tables;

pub use self::tables::{
    frequencies as print_frequencies, mapping as print_mapping, survey as print_survey,
};

use cribforge::error::CfResult;
use cribforge::solver::{Solution, Verdict};
use std::io::Write;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

pub fn print_solution(solution: &Solution) {
    match solution.verdict() {
        Verdict::Accepted => println!(
            "\n✅ Accepted alignment @{} ({} recognizable words)",
            solution.alignment_index, solution.score
        ),
        Verdict::Fallback => {
            println!(
                "\n⚠️  No alignment cleared the threshold. Showing the first alignment (@{}) as a best effort.",
                solution.alignment_index
            );
            println!("    This decryption is unverified.");
        }
    }

    println!("\n{}", solution.decrypted_text.trim_end());
    print_mapping(&solution.mapping);
}

pub fn write_mapping_csv<W: Write>(writer: W, pairs: &[(char, char)]) -> CfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["cipher", "plain"])?;
    for (cipher, plain) in pairs {
        wtr.write_record([cipher.to_string(), plain.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_mapping_csv() {
        let mut buf = Vec::new();
        write_mapping_csv(&mut buf, &[('W', 'T'), ('K', 'H')]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "cipher,plain\nW,T\nK,H\n");
    }
}
