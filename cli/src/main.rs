mod error;
mod highlighter;

use clap::{Parser, ValueEnum};
use error::{CliError, parse_parameter};
use miette::Result;
use std::io::{BufRead, BufReader, IsTerminal};
use svexpr::{
    EngineOptions, ExpressionParser, ParameterTable, RadixPolicy, SubstitutionOptions,
    render_error,
};
use tracing::debug;

/// svexpr - SystemVerilog-flavored parameter expressions
#[derive(Parser, Debug)]
#[command(name = "svexpr")]
#[command(about = "Evaluate SystemVerilog-flavored parameter expressions", long_about = None)]
struct Args {
    /// Parameter definition NAME=EXPRESSION (repeatable)
    #[arg(short = 'p', long = "param", value_name = "NAME=EXPRESSION")]
    params: Vec<String>,

    /// Print the dominant radix of the expression instead of its value
    #[arg(long)]
    radix: bool,

    /// Explain why an expression is unresolvable
    #[arg(long)]
    check: bool,

    /// Print the expression with every parameter expanded
    #[arg(long)]
    substitute: bool,

    /// How the dominant radix is chosen
    #[arg(long, value_enum, default_value_t = Policy::Leftmost)]
    policy: Policy,

    /// Maximum substitution passes
    #[arg(long, default_value_t = svexpr_core::substitution::DEFAULT_MAX_PASSES)]
    max_passes: usize,

    /// Expression to evaluate (if not provided, reads lines from stdin)
    expression: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    Leftmost,
    Greatest,
}

impl From<Policy> for RadixPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Leftmost => RadixPolicy::Leftmost,
            Policy::Greatest => RadixPolicy::Greatest,
        }
    }
}

struct Session {
    parser: ExpressionParser<ParameterTable>,
    args: Args,
    color: bool,
}

impl Session {
    fn interpret_input(&self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        debug!(input, "Interpreting input");

        if self.args.substitute {
            match self.parser.substitute(input) {
                Ok(text) => println!("{}", self.paint_expression(&text)),
                Err(e) => self.report(&e),
            }
        }

        if self.args.radix {
            println!("{}", self.parser.dominant_radix(input).value());
            return;
        }

        if self.args.check {
            match self.parser.try_evaluate(input) {
                Ok(value) => println!("{}", self.paint_result(&value.to_string())),
                Err(e) => self.report(&e),
            }
            return;
        }

        println!("{}", self.paint_result(&self.parser.parse_expression(input)));
    }

    fn report(&self, error: &svexpr::Error) {
        if self.color {
            render_error(error);
        } else {
            eprint!("{}", svexpr::render_error_to_string_no_color(error));
        }
    }

    fn paint_expression(&self, text: &str) -> String {
        if self.color {
            highlighter::highlight(text)
        } else {
            text.to_string()
        }
    }

    fn paint_result(&self, text: &str) -> String {
        if self.color {
            highlighter::highlight_result(text)
        } else {
            text.to_string()
        }
    }
}

fn init_logging() -> Result<(), CliError> {
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control log level; default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let parameters = args
        .params
        .iter()
        .map(|p| parse_parameter(p))
        .collect::<Result<ParameterTable, CliError>>()?;

    let options = EngineOptions {
        substitution: SubstitutionOptions {
            max_passes: args.max_passes,
            ..SubstitutionOptions::default()
        },
        radix_policy: args.policy.into(),
        ..EngineOptions::default()
    };

    let session = Session {
        parser: ExpressionParser::with_options(parameters, options),
        color: std::io::stdout().is_terminal(),
        args,
    };

    // Check if we have a direct expression argument
    if let Some(expr) = &session.args.expression {
        session.interpret_input(expr);
        return Ok(());
    }

    // Otherwise, evaluate each line from stdin
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    for line in reader.lines() {
        let line = line.map_err(CliError::Stdin)?;
        session.interpret_input(&line);
    }

    Ok(())
}
