use ductus_core::generated::default_config;
use ductus_core::strokes::StrokePair;
use ductus_core::{Catalog, CatalogSpec, ContextId, KernConfig, KernOptions, Kerner};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::sync::Arc;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Kern(ductus_core::Error),
    Json(serde_json::Error),
    TooManyContexts(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Kern(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::TooManyContexts(line) => {
                write!(f, "input line {line} exceeds the context id range")
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ductus_core::Error> for CliError {
    fn from(value: ductus_core::Error) -> Self {
        Self::Kern(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Kern,
    Sequence,
    Stats,
    Catalog,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    config: Option<String>,
    catalog: Option<String>,
    font_size: Option<f64>,
    unit: Option<String>,
    precision: Option<u64>,
    class_prefix: Option<String>,
    no_tag_classes: bool,
    pretty: bool,
    verbose: bool,
}

/// `--catalog` input format plus the derived stroke-pair table (ignored when loaded back).
#[derive(Serialize)]
struct CatalogOut<'a> {
    #[serde(flatten)]
    spec: CatalogSpec,
    pairs: &'a [StrokePair],
}

fn usage() -> &'static str {
    "ductus-cli\n\
\n\
USAGE:\n\
  ductus-cli [kern] [OPTIONS] [<path>|-]\n\
  ductus-cli sequence [--pretty] [OPTIONS] [<path>|-]\n\
  ductus-cli stats [--pretty] [OPTIONS] [<path>|-]\n\
  ductus-cli catalog [--pretty] [--catalog <json>]\n\
\n\
OPTIONS:\n\
  --font-size <n>       font size used for every context (default 16)\n\
  --unit <unit>         letter-spacing unit (default px)\n\
  --precision <n>       decimal places of letter-spacing values (default 3)\n\
  --class-prefix <p>    prefix of per-position class names (default kern-)\n\
  --no-tag-classes      re-emit tags without position classes\n\
  --config <json>       JSON config merged over the defaults\n\
  --catalog <json>      JSON stroke/character catalog replacing the built-in one\n\
  --out <path>          write output to a file instead of stdout\n\
  --verbose             debug logging on stderr\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Every non-empty input line is kerned as its own context.\n\
  - kern prints the kerned markup, one line per context.\n\
  - sequence prints the node/pair sequences as JSON; stats prints occurrence statistics.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "kern" => args.command = Command::Kern,
            "sequence" => args.command = Command::Sequence,
            "stats" => args.command = Command::Stats,
            "catalog" => args.command = Command::Catalog,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--no-tag-classes" => args.no_tag_classes = true,
            "--font-size" => {
                let size = next_value(&mut it)?
                    .parse::<f64>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(size.is_finite() && size > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.font_size = Some(size);
            }
            "--unit" => args.unit = Some(next_value(&mut it)?.clone()),
            "--precision" => {
                args.precision = Some(
                    next_value(&mut it)?
                        .parse::<u64>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--class-prefix" => args.class_prefix = Some(next_value(&mut it)?.clone()),
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--catalog" => args.catalog = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    write_text(&text, out)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Defaults, then `--config`, then individual flags.
fn effective_config(args: &Args) -> Result<KernConfig, CliError> {
    let mut config = default_config();
    if let Some(path) = args.config.as_deref() {
        let overrides = KernConfig::from_json_str(&std::fs::read_to_string(path)?)?;
        config.deep_merge(overrides.as_value());
    }
    if let Some(size) = args.font_size {
        config.set_value("fontSize", Value::from(size));
    }
    if let Some(unit) = &args.unit {
        config.set_value("unit", Value::from(unit.as_str()));
    }
    if let Some(precision) = args.precision {
        config.set_value("precision", Value::from(precision));
    }
    if let Some(prefix) = &args.class_prefix {
        config.set_value("classPrefix", Value::from(prefix.as_str()));
    }
    if args.no_tag_classes {
        config.set_value("annotateTags", Value::Bool(false));
    }
    Ok(config)
}

fn load_catalog(path: Option<&str>) -> Result<Catalog, CliError> {
    match path {
        None => Ok(Catalog::builtin()?),
        Some(path) => Ok(Catalog::from_json_str(&std::fs::read_to_string(path)?)?),
    }
}

/// Context id of the `idx`-th non-empty input line.
fn context_id(idx: usize) -> Result<ContextId, CliError> {
    u32::try_from(idx)
        .map(ContextId)
        .map_err(|_| CliError::TooManyContexts(idx + 1))
}

fn run(args: Args) -> Result<(), CliError> {
    let options = KernOptions::from_config(&effective_config(&args)?)?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    tracing::debug!(
        strokes = catalog.strokes().len(),
        characters = catalog.characters().len(),
        "catalog loaded"
    );

    if args.command == Command::Catalog {
        let out = CatalogOut {
            spec: catalog.to_spec(),
            pairs: catalog.stroke_pairs().pairs(),
        };
        return write_json(&out, args.pretty, args.out.as_deref());
    }

    let text = read_input(args.input.as_deref())?;
    let mut kerner = Kerner::with_catalog(Arc::new(catalog), options);
    let mut contexts = Vec::new();
    for (idx, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let context = context_id(idx)?;
        kerner.kern_default(context, line);
        contexts.push(context);
    }

    match args.command {
        Command::Kern => {
            let mut out = String::new();
            for context in contexts {
                if let Some(html) = kerner.render(context) {
                    out.push_str(&html);
                    out.push('\n');
                }
            }
            write_text(&out, args.out.as_deref())
        }
        Command::Sequence => {
            let sequences: Vec<_> = kerner.sequences().collect();
            write_json(&sequences, args.pretty, args.out.as_deref())
        }
        Command::Stats => write_json(
            &kerner.tracker().snapshot(),
            args.pretty,
            args.out.as_deref(),
        ),
        Command::Catalog => Ok(()),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_ids_stop_at_the_u32_range() {
        assert_eq!(context_id(0).unwrap(), ContextId(0));
        assert_eq!(
            context_id(u32::MAX as usize).unwrap(),
            ContextId(u32::MAX)
        );
        if let Ok(past) = usize::try_from(u64::from(u32::MAX) + 1) {
            assert!(matches!(
                context_id(past),
                Err(CliError::TooManyContexts(_))
            ));
        }
    }

    #[test]
    fn parse_args_rejects_bad_values_as_usage() {
        let argv = |rest: &[&str]| {
            let mut argv = vec!["ductus-cli".to_string()];
            argv.extend(rest.iter().map(|a| a.to_string()));
            argv
        };
        assert!(matches!(
            parse_args(&argv(&["--precision", "x"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&argv(&["a.html", "b.html"])),
            Err(CliError::Usage(_))
        ));
        let args = parse_args(&argv(&["stats", "--font-size", "12", "-"])).unwrap();
        assert_eq!(args.command, Command::Stats);
        assert_eq!(args.font_size, Some(12.0));
        assert_eq!(args.input.as_deref(), Some("-"));
    }
}
