use catalyst_ai::app::modules::{
    CustomerAIModule, EmployeeCoPilotModule, MarketPulseModule, ModuleController, PromptSource,
    SmartInventoryModule, StorePerformanceDiagnoserModule,
};
use catalyst_ai::app::render::{render_failure, render_state, Render};
use catalyst_ai::app::state::ModuleState;
use catalyst_ai::app::ModuleKind;
use catalyst_ai::config::{CliConfig, Command, CopilotArgs, InventoryArgs};
use catalyst_ai::core::ledger::serialize_ledger;
use catalyst_ai::fixtures::mock_data::{PERFORMANCE_ISSUE_EXAMPLES, STAFF_QUERY_EXAMPLES};
use catalyst_ai::utils::error::{CatalystError, ErrorSeverity};
use catalyst_ai::utils::{logger, validation::Validate};
use catalyst_ai::GeminiClient;
use clap::Parser;
use serde::Serialize;

/// 根據錯誤嚴重程度決定退出碼
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low | ErrorSeverity::High => 1, // 輸入或設定錯誤
        ErrorSeverity::Medium => 2,                    // 可重試錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn fail(e: &CatalystError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()));
}

/// Triggers one module, prints its result and returns the exit code.
async fn run_module<M>(source: M, client: &GeminiClient, config: &CliConfig) -> i32
where
    M: PromptSource,
    M::Output: Render + Serialize,
{
    let mut controller = ModuleController::new(source);
    eprintln!("⏳ {}", M::KIND.loading_text());

    match controller.trigger_with_retries(client, config.retries).await {
        ModuleState::Ready(data) if config.json => match serde_json::to_string_pretty(data) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                let e = CatalystError::from(e);
                eprintln!("❌ {}", e);
                exit_code(e.severity())
            }
        },
        ModuleState::Failed(failure) => {
            eprintln!("{}", render_failure(failure));
            tracing::error!("💡 Recovery suggestion: {}", failure.suggestion);
            exit_code(failure.severity)
        }
        state => {
            println!("📊 {}\n", M::KIND);
            println!("{}", render_state(state, M::KIND.loading_text()));
            0
        }
    }
}

fn inventory_module(args: &InventoryArgs) -> catalyst_ai::Result<SmartInventoryModule> {
    let mut module = SmartInventoryModule::from_fixtures()?;

    for assignment in &args.set {
        let Some((name, quantity)) = assignment.split_once('=') else {
            eprintln!("⚠️ Ignoring '{}': expected NAME=QTY", assignment);
            continue;
        };
        if !module.update_quantity(name.trim(), quantity) {
            eprintln!("⚠️ Ignoring '{}'", assignment);
        }
    }

    if let Some(count) = args.generate_sales {
        module.regenerate_sales(count);
    }
    Ok(module)
}

fn copilot_module(args: &CopilotArgs) -> catalyst_ai::Result<EmployeeCoPilotModule> {
    let mut module = EmployeeCoPilotModule::default();
    match (&args.query, &args.example) {
        (_, Some(example)) => module.use_example(example)?,
        (Some(query), None) => module.set_query(query.as_str()),
        (None, None) => {}
    }
    Ok(module)
}

fn print_ledger(generate: Option<usize>) -> catalyst_ai::Result<()> {
    let mut module = SmartInventoryModule::from_fixtures()?;
    if let Some(count) = generate {
        module.regenerate_sales(count);
    }
    println!("{}", serialize_ledger(module.sales_history())?.trim_end());
    Ok(())
}

fn print_examples() {
    println!("Modules:");
    for kind in ModuleKind::ALL {
        println!("  {}", kind);
    }
    println!("\nStaff questions (copilot --example ID):");
    for example in STAFF_QUERY_EXAMPLES.iter() {
        println!("  {}  {}", example.id, example.query);
    }
    println!("\nPerformance issues (diagnose --issue ID):");
    for issue in PERFORMANCE_ISSUE_EXAMPLES.iter() {
        println!(
            "  {}  {}: {}",
            issue.id, issue.store_display_name, issue.concern_display_name
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting catalyst-ai CLI");

    // 不需要遠端服務的指令
    if !config.needs_generator() {
        match &config.command {
            Command::Ledger { generate } => {
                if let Err(e) = print_ledger(*generate) {
                    fail(&e);
                }
            }
            _ => print_examples(),
        }
        return Ok(());
    }

    // 驗證配置
    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    if config.verbose {
        tracing::debug!("Gemini settings: {:?}", settings);
    }
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let client = match GeminiClient::from_settings(&settings) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };
    tracing::info!("🤖 Using model {}", client.model());

    let code = match &config.command {
        Command::Inventory(args) => match inventory_module(args) {
            Ok(module) => run_module(module, &client, &config).await,
            Err(e) => fail(&e),
        },
        Command::Customers => run_module(CustomerAIModule, &client, &config).await,
        Command::Market => run_module(MarketPulseModule, &client, &config).await,
        Command::Copilot(args) => match copilot_module(args) {
            Ok(module) => run_module(module, &client, &config).await,
            Err(e) => fail(&e),
        },
        Command::Diagnose { issue } => {
            run_module(StorePerformanceDiagnoserModule::new(issue.as_str()), &client, &config).await
        }
        Command::Ledger { .. } | Command::Examples => 0,
    };

    if code > 0 {
        std::process::exit(code);
    }
    Ok(())
}
