use crate::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::report::history;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::History { name, json } = cmd {
        let store = ctx.store();
        if !store.path().exists() {
            info(format!("No results yet ({})", store.path().display()));
            return Ok(());
        }

        let entries = store.load_all()?;
        let selected = history::filter_by_name(&entries, name.as_deref());

        if *json {
            println!("{}", history::to_json(&selected)?);
        } else if selected.is_empty() {
            info("No attempts match");
        } else {
            print!("{}", history::render_table(&selected));
        }
    }
    Ok(())
}
