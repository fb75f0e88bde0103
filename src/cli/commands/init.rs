use crate::Context;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::qlog_quiet;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the result store of the selected edition, with its header row
pub fn handle(ctx: &Context) -> AppResult<()> {
    println!("⚙️  Initializing rTrivia…");

    if !ctx.test {
        let path = ctx.cfg.save()?;
        println!("📄 Config file : {}", path.display());
    } else {
        println!(
            "📄 Config file : {} (test mode, not written)",
            Config::config_file().display()
        );
    }

    let store = ctx.store();
    let created = store.ensure_initialized()?;
    println!("🗂️  Results     : {}", store.path().display());

    if created {
        qlog_quiet(
            &ctx.activity_log(),
            "init",
            &store.path().to_string_lossy(),
            &format!("Result store created ({} edition)", ctx.edition.as_str()),
        );
        println!("✅ Result store created");
    } else {
        println!("✅ Result store already present, left untouched");
    }

    println!("🎉 rTrivia initialization completed!");
    Ok(())
}
