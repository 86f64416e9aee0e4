use anyhow::{Context, Result};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{parse_inline, render_inline};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

#[derive(Debug, PartialEq)]
struct Args {
    json: bool,
    input: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut json = false;
    let mut input = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-" if input.is_none() => input = Some(None),
            other if !other.starts_with('-') && input.is_none() => {
                input = Some(Some(PathBuf::from(other)))
            }
            _ => return None,
        }
    }
    Some(Args {
        json,
        input: input.flatten(),
    })
}

fn usage(args: &[String]) -> String {
    let program = args.first().map_or("markdown-sitegen", String::as_str);
    format!("Usage: {program} [--json] [FILE|-]")
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<String> {
    let text = read_input(args.input.as_ref())?;
    // Inline runs have no trailing newline of their own
    let text = text.trim_end_matches(['\r', '\n']);

    if args.json {
        let segments = parse_inline(text);
        log::debug!("parsed {} segments", segments.len());
        return Ok(serde_json::to_string_pretty(&segments)?);
    }

    Ok(render_inline(text, &config.wrapper_tag, config.escape_html)?)
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        eprintln!("{}", usage(&args));
        process::exit(1);
    };

    log::debug!("Config path: {}", Config::config_path().display());
    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match run(&parsed, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("markdown-sitegen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(
            parse_args(&args(&[])),
            Some(Args {
                json: false,
                input: None
            })
        );
        assert_eq!(
            parse_args(&args(&["-"])),
            Some(Args {
                json: false,
                input: None
            })
        );
    }

    #[test]
    fn file_and_json_flag() {
        assert_eq!(
            parse_args(&args(&["--json", "page.md"])),
            Some(Args {
                json: true,
                input: Some(PathBuf::from("page.md"))
            })
        );
    }

    #[test]
    fn rejects_unknown_flags_and_extra_files() {
        assert_eq!(parse_args(&args(&["--html"])), None);
        assert_eq!(parse_args(&args(&["a.md", "b.md"])), None);
        assert_eq!(parse_args(&args(&["-", "-"])), None);
    }

    #[test]
    fn usage_without_program_name() {
        assert_eq!(usage(&[]), "Usage: markdown-sitegen [--json] [FILE|-]");
        assert_eq!(
            usage(&["sitegen".to_string()]),
            "Usage: sitegen [--json] [FILE|-]"
        );
    }

    #[test]
    fn rejects_single_dash_flags() {
        assert_eq!(parse_args(&args(&["-v"])), None);
        assert_eq!(parse_args(&args(&["page.md", "-j"])), None);
    }

    #[test]
    fn run_renders_file_with_config() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("inline.md");
        std::fs::write(&file, "Hello **there** & [home](/)\n").unwrap();

        let parsed = Args {
            json: false,
            input: Some(file.clone()),
        };
        let config = Config {
            wrapper_tag: "span".to_string(),
            escape_html: true,
        };
        assert_eq!(
            run(&parsed, &config).unwrap(),
            r#"<span>Hello <b>there</b> &amp; <a href="/">home</a></span>"#
        );

        let parsed = Args {
            json: true,
            input: Some(file),
        };
        let json: serde_json::Value =
            serde_json::from_str(&run(&parsed, &Config::default()).unwrap()).unwrap();
        assert_eq!(json[1]["kind"], "bold");
        assert_eq!(json[3]["url"], "/");
    }

    #[test]
    fn run_reports_missing_file() {
        let parsed = Args {
            json: false,
            input: Some(PathBuf::from("/definitely/not/here.md")),
        };
        let err = run(&parsed, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }
}
