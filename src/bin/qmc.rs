//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads minterms from the command line, a file, or stdin and prints the
//! minimized sum-of-products expression.

use clap::{ArgAction, Parser, ValueEnum};
use qmc_logic::{
    parse_minterms, read_minterms, read_minterms_file, Minimization, MinimizeError,
    MinimizerConfig, Minterm, QuineMcCluskey, Term,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Print the minimized sum-of-products expression (default)
    Minimize,
    /// List every prime implicant
    Primes,
    /// List the essential prime implicants
    Essential,
    /// Print statistics about the run
    Stats,
}

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Minterms (decimal); read from --file or stdin when omitted
    #[arg(value_name = "MINTERM")]
    minterms: Vec<String>,

    /// Read minterms from a file
    #[arg(short = 'f', long = "file", conflicts_with = "minterms")]
    file: Option<PathBuf>,

    /// Number of variables (default: bit length of the largest minterm)
    #[arg(short = 'n', long = "variables")]
    variables: Option<usize>,

    /// Keep superset products during Petrick expansion
    #[arg(long = "no-absorb")]
    no_absorb: bool,

    /// What to print
    #[arg(short = 'D', long = "do", value_enum, default_value = "minimize")]
    command: Command,

    /// Provide execution summary on stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let minterms = match load_minterms(&args) {
        Ok(minterms) => minterms,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let qm = QuineMcCluskey::with_config(build_config(&args));

    let result = match qm.minimize(&minterms) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!("Minimized {} minterm(s)", result.stats().num_minterms);
        if let Err(e) = print_stats(&mut io::stderr(), &result) {
            eprintln!("Error writing summary: {}", e);
            process::exit(1);
        }
        eprintln!();
    }

    if let Err(e) = write_output(&mut io::stdout().lock(), &args.command, &result) {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn build_config(args: &Args) -> MinimizerConfig {
    let mut config = MinimizerConfig::new().with_absorb(!args.no_absorb);
    if let Some(n) = args.variables {
        config = config.with_num_variables(n);
    }
    config
}

fn load_minterms(args: &Args) -> Result<Vec<Minterm>, MinimizeError> {
    if let Some(path) = &args.file {
        read_minterms_file(path)
    } else if !args.minterms.is_empty() {
        parse_minterms(&args.minterms.join(" "))
    } else {
        read_minterms(io::stdin().lock())
    }
}

fn write_output<W: Write>(out: &mut W, command: &Command, result: &Minimization) -> io::Result<()> {
    match command {
        Command::Minimize => writeln!(out, "{}", result.cover()),
        Command::Primes => write_terms(out, result.prime_implicants().iter()),
        Command::Essential => write_terms(out, result.essential().iter()),
        Command::Stats => print_stats(out, result),
    }
}

fn write_terms<'a, W, I>(out: &mut W, terms: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Term>,
{
    for term in terms {
        let minterms: Vec<String> = term.minterms().iter().map(|m| m.to_string()).collect();
        writeln!(
            out,
            "{}  {}  ({})",
            term,
            term.to_literal_expression(),
            minterms.join(", ")
        )?;
    }
    Ok(())
}

fn print_stats<W: Write>(out: &mut W, result: &Minimization) -> io::Result<()> {
    let stats = result.stats();
    writeln!(out, "Minimization Statistics:")?;
    writeln!(out, "  Variables:           {}", stats.num_variables)?;
    writeln!(out, "  Minterms:            {}", stats.num_minterms)?;
    writeln!(out, "  Merge rounds:        {}", stats.rounds)?;
    writeln!(out, "  Prime implicants:    {}", stats.prime_implicants)?;
    writeln!(out, "  Essential:           {}", stats.essential)?;
    writeln!(out, "  Petrick products:    {}", stats.petrick_products)?;
    writeln!(out, "  Cover terms:         {}", stats.cover_terms)?;
    writeln!(out, "  Cover literals:      {}", result.cover().num_literals())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn render(command: Command, minterms: &[Minterm]) -> String {
        let result = QuineMcCluskey::new().minimize(minterms).unwrap();
        let mut out = Vec::new();
        write_output(&mut out, &command, &result).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_minimize_output() {
        assert_eq!(render(Command::Minimize, &[1, 2, 3]), "B + A\n");
        assert_eq!(render(Command::Minimize, &[0, 2, 4, 6]), "C'\n");
    }

    #[test]
    fn test_primes_output() {
        assert_eq!(
            render(Command::Primes, &[1, 2, 3]),
            "-1  B  (1, 3)\n1-  A  (2, 3)\n"
        );
        assert_eq!(
            render(Command::Primes, &[0, 1, 2, 3]),
            "--    (0, 1, 2, 3)\n"
        );
    }

    #[test]
    fn test_essential_output() {
        assert_eq!(
            render(Command::Essential, &[0, 2, 4, 6]),
            "--0  C'  (0, 2, 4, 6)\n"
        );
        // cyclic function: nothing is essential
        assert_eq!(render(Command::Essential, &[0, 1, 2, 5, 6, 7]), "");
    }

    #[test]
    fn test_stats_output() {
        let expected = "\
Minimization Statistics:
  Variables:           2
  Minterms:            3
  Merge rounds:        2
  Prime implicants:    2
  Essential:           2
  Petrick products:    0
  Cover terms:         2
  Cover literals:      2
";
        assert_eq!(render(Command::Stats, &[1, 2, 3]), expected);
    }

    #[test]
    fn test_build_config() {
        let config = build_config(&parse(&["qmc", "1", "3"]));
        assert_eq!(config, MinimizerConfig::new());

        let config = build_config(&parse(&["qmc", "-n", "4", "--no-absorb", "1"]));
        assert_eq!(config.num_variables, Some(4));
        assert!(!config.absorb);
    }

    #[test]
    fn test_do_selector() {
        let args = parse(&["qmc", "-D", "primes", "5"]);
        assert!(matches!(args.command, Command::Primes));
        let args = parse(&["qmc", "5"]);
        assert!(matches!(args.command, Command::Minimize));
    }

    #[test]
    fn test_load_from_arguments() {
        let args = parse(&["qmc", "4", "6", "0"]);
        assert_eq!(load_minterms(&args).unwrap(), vec![4, 6, 0]);

        let args = parse(&["qmc", "4", "x"]);
        let err = load_minterms(&args).unwrap_err();
        assert!(matches!(err, MinimizeError::InvalidMinterm { position: 1, .. }));
    }

    #[test]
    fn test_empty_file_message() {
        let temp = NamedTempFile::new().expect("Failed to create temp file");
        let path = temp.path().to_str().unwrap().to_string();
        let err = load_minterms(&parse(&["qmc", "-f", &path])).unwrap_err();
        assert_eq!(err.to_string(), "The input is empty!");
    }

    #[test]
    fn test_load_from_file() {
        let mut temp = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp, "0 2\n4 6").expect("Failed to write temp file");
        let path = temp.path().to_str().unwrap().to_string();
        assert_eq!(
            load_minterms(&parse(&["qmc", "--file", &path])).unwrap(),
            vec![0, 2, 4, 6]
        );
    }
}
