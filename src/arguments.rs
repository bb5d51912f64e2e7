/// Centralized command-line argument handling
///
/// Arguments are captured once into `CMD_ARGS` and can be overridden by tests
/// through `set_cmd_args`.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Override the captured arguments
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Copy of the current arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Value following `flag`, if present
pub fn get_arg_value(flag: &str) -> Option<String> {
    arg_value_in(&get_cmd_args(), flag)
}

/// Value following `flag` in an explicit argument list
pub fn arg_value_in(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

// =============================================================================
// DEBUG FLAGS
// =============================================================================

pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver") || has_arg("--debug-all")
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Names of all enabled `--debug-*` modes
pub fn get_enabled_debug_modes() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|a| a.strip_prefix("--debug-").map(|s| s.to_string()))
        .collect()
}

pub fn print_help() {
    println!("volo-advisor - Navi/Volo staking data proxy and stake-timing heuristic");
    println!();
    println!("USAGE:");
    println!("    volo-advisor [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --host <HOST>           Bind address (env HOST, default 0.0.0.0)");
    println!("    --port <PORT>           Listen port (env PORT, default 5000)");
    println!("    --log-file <PATH>       Mirror logs to a file (env LOG_FILE)");
    println!("    --quiet, -q             Only show warnings and errors");
    println!("    --verbose, -v           Show verbose logs");
    println!("    --debug-<tag>           Debug logs for one tag:");
    println!("                            system, config, webserver, api, pools, rewards, predict");
    println!("    --debug-all             Debug logs for every tag");
    println!("    --help, -h              Print this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    NAVI_POOLS_API          Override the pools endpoint");
    println!("    NAVI_REWARDS_API        Override the rewards endpoint");
    println!("    UPSTREAM_TIMEOUT_SECS   Upstream request timeout (default 10)");
}
