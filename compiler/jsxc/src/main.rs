//! jsxc command-line driver.

use std::io::{self, Read};
use std::path::Path;

use jsxc::cli::{self, CliArgs};
use jsxc::{ErrorCode, Severity};

fn main() {
    jsxc::init_tracing();

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    if args.help {
        println!("{}", cli::USAGE);
        return;
    }

    if let Some(code) = &args.explain {
        explain(code);
        return;
    }

    run(&args);
}

fn run(args: &CliArgs) {
    let source = match read_source(args.file.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            let name = args
                .file
                .as_deref()
                .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            eprintln!("error: cannot read {name}: {err}");
            std::process::exit(1);
        }
    };

    if args.strict {
        match jsxc::try_compile(&source, &args.options) {
            Ok(output) => print!("{output}"),
            Err(err) => {
                jsxc::report(&err, args.options.color, Severity::Error);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", jsxc::compile_with(&source, &args.options));
    }
}

fn read_source(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn explain(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.description());
        }
        std::process::exit(1);
    };
    println!("{code}: {}", code.description());
}
