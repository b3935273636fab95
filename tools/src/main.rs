//! fcm-runner: headless page runner for the FC Manager 26 companion site.
//!
//! Usage:
//!   fcm-runner --page team --db profile.db
//!   fcm-runner --page transfers --data-dir ./data --ipc-mode

use anyhow::Result;
use fcmanager_core::{
    bootstrap::{bootstrap, PageModel, PageView},
    budget_view::TransactionTable,
    command::{CommandOutcome, UiCommand},
    config::ManagerConfig,
    market_view::MarketTable,
    store::ProfileStore,
};
use std::env;
use std::io::{self, BufRead, Write};

/// One line of IPC input: a page command, or a runner control message.
enum IpcRequest {
    Control(IpcControl),
    Ui(UiCommand),
}

/// Control messages carry a `type` key; page commands carry `cmd`.
#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcControl {
    GetState,
    Quit,
}

#[derive(serde::Serialize)]
struct IpcReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<CommandOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice:  Option<String>,
    state:   PageModel,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let page = string_arg(&args, "--page").unwrap_or("team");
    let db = string_arg(&args, "--db").unwrap_or(":memory:");
    let data_dir = string_arg(&args, "--data-dir");

    let config = match data_dir {
        Some(dir) => ManagerConfig::load(dir)?,
        None => ManagerConfig::embedded()?,
    };

    if !ipc_mode {
        println!("FC Manager 26 fcm-runner");
        println!("  page:      {page}");
        println!("  db:        {db}");
        println!("  data_dir:  {}", data_dir.unwrap_or("(embedded)"));
        println!();
    }

    let store = ProfileStore::open(db)?;
    store.migrate()?;

    let Some(mut view) = bootstrap(page, &config, &store) else {
        log::warn!("No view for page '{page}'");
        return Ok(());
    };

    if ipc_mode {
        run_ipc_loop(&mut view)?;
    } else {
        print_page(&view.render());
    }
    Ok(())
}

fn run_ipc_loop(view: &mut PageView<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }
        let Some(reply) = handle_line(view, &buffer)? else {
            break;
        };
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn parse_request(line: &str) -> serde_json::Result<IpcRequest> {
    let value: serde_json::Value = serde_json::from_str(line)?;
    if value.get("type").is_some() {
        serde_json::from_value(value).map(IpcRequest::Control)
    } else {
        serde_json::from_value(value).map(IpcRequest::Ui)
    }
}

/// Apply one IPC line and return the JSON reply, or `None` on quit.
/// Malformed lines reply `{"error": ...}` and leave the page untouched.
fn handle_line(view: &mut PageView<'_>, line: &str) -> Result<Option<String>> {
    let request = match parse_request(line) {
        Ok(r) => r,
        Err(e) => {
            let err_json = serde_json::json!({ "error": e.to_string() });
            return Ok(Some(err_json.to_string()));
        }
    };

    let reply = match request {
        IpcRequest::Control(IpcControl::Quit) => return Ok(None),
        IpcRequest::Control(IpcControl::GetState) => IpcReply {
            outcome: None,
            notice:  None,
            state:   view.render(),
        },
        IpcRequest::Ui(command) => {
            let outcome = view.handle(command)?;
            let notice = match &outcome {
                CommandOutcome::Purchased { receipt } => Some(receipt.message.clone()),
                _ => None,
            };
            IpcReply { outcome: Some(outcome), notice, state: view.render() }
        }
    };
    Ok(Some(serde_json::to_string(&reply)?))
}

fn print_page(model: &PageModel) {
    match model {
        PageModel::Team(team) => {
            let formations: Vec<String> = team
                .formations
                .iter()
                .map(|f| if f.selected { format!("[{}]", f.name) } else { f.name.clone() })
                .collect();
            println!("=== TEAM ===");
            println!("  formations: {}", formations.join("  "));
            for row in &team.rows {
                let chosen = row
                    .selected
                    .and_then(|id| row.options.iter().find(|o| o.player_id == id))
                    .map_or(team.empty_choice, |o| o.label.as_str());
                println!(
                    "  {:<4} {:<44} {} ({} candidates)",
                    row.slot,
                    chosen,
                    row.role_label,
                    row.options.len()
                );
            }
        }
        PageModel::Budget(budget) => {
            println!("=== BUDGET ===");
            println!("  initial:  {}", budget.initial_budget);
            println!("  balance:  {}", budget.balance_label);
            match &budget.transactions {
                TransactionTable::Empty { message } => println!("  {message}"),
                TransactionTable::Rows { rows } => {
                    for r in rows {
                        println!("  {:>3}. {:<24} {:<6} {}", r.index, r.player_name, r.kind_label, r.price);
                    }
                }
            }
        }
        PageModel::Transfers(market) => {
            println!("=== TRANSFERS ===");
            println!("  positions: {}", market.positions.join(", "));
            match &market.players {
                MarketTable::Empty { message } => println!("  {message}"),
                MarketTable::Rows { rows } => {
                    for r in rows {
                        println!(
                            "  {:<20} {:<12} {:>3} {:>3} {:<22} {}",
                            r.name, r.positions, r.overall, r.potential, r.club, r.value
                        );
                    }
                }
            }
        }
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
