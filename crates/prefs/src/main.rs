#![forbid(unsafe_code)]

use cw_prefs::{PrefsConfig, PrefsService, Session, install_tracing};
use cw_storage::SqliteStore;
use serde_json::{Value, json};
use std::process::ExitCode;

const VALUE_FLAGS: &[&str] = &["--storage-dir", "--user"];

fn usage() -> &'static str {
    "cw_prefs: per-user column width preferences\n\n\
USAGE:\n\
  cw_prefs [--storage-dir DIR] [--user ID] get VIEW_KEY\n\
  cw_prefs [--storage-dir DIR] [--user ID] set VIEW_KEY WIDTHS_JSON\n\
  cw_prefs [--storage-dir DIR] [--user ID] list [LIMIT [OFFSET]]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
ENV:\n\
  CW_PREFS_STORAGE_DIR  default for --storage-dir (.cw_prefs)\n\
  CW_PREFS_USER         default for --user\n\
  CW_PREFS_LOG          log filter for stderr (warn)\n"
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(ExitCode::SUCCESS);
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("cw_prefs {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let config = PrefsConfig::from_env(&args);
    install_tracing(&config.log_filter);

    let positional = positional_args(&args);
    let Some((method, call_args)) = parse_command(&positional) else {
        eprint!("{}", usage());
        return Ok(ExitCode::from(2));
    };

    let session = match Session::from_user(config.user.as_deref()) {
        Ok(session) => session,
        Err(err) => {
            let resp = json!({
                "success": false,
                "intent": "error",
                "result": {},
                "warnings": [],
                "error": { "code": "INVALID_INPUT", "message": format!("user {}", err.message()) }
            });
            println!("{resp}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let store = SqliteStore::open(&config.storage_dir)?;
    let mut service = PrefsService::new(store);
    let resp = service.call(&session, method, &call_args);
    println!("{resp}");

    if resp.get("success").and_then(Value::as_bool) == Some(true) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn positional_args(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

/// Malformed widths JSON is forwarded as a string so the call rejects it with INVALID_INPUT.
fn parse_command(positional: &[&str]) -> Option<(&'static str, Value)> {
    match positional {
        ["get", view_key] => Some(("get_column_widths", json!([view_key]))),
        ["set", view_key, widths] => {
            let widths = serde_json::from_str::<Value>(widths)
                .unwrap_or_else(|_| Value::String((*widths).to_string()));
            Some(("set_column_widths", json!([view_key, widths])))
        }
        ["list"] => Some(("list_column_widths", json!({}))),
        ["list", limit] => Some(("list_column_widths", json!({ "limit": parse_count(limit) }))),
        ["list", limit, offset] => Some((
            "list_column_widths",
            json!({ "limit": parse_count(limit), "offset": parse_count(offset) }),
        )),
        _ => None,
    }
}

/// Unparseable counts pass through as strings so the call reports them.
fn parse_count(raw: &str) -> Value {
    match raw.parse::<u64>() {
        Ok(value) => Value::from(value),
        Err(_) => Value::String(raw.to_string()),
    }
}
