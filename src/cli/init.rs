use chrono::Datelike;

use ccds::{BuiltinTemplates, Git, InitOptions, InitOutcome, Prompter};

pub(crate) fn run(opts: InitOptions, non_interactive: bool) {
    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => fail(&e),
    };

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut prompter = Prompter::new(stdin, stdout, !non_interactive);
    let templates = match BuiltinTemplates::new() {
        Ok(templates) => templates,
        Err(e) => fail(&e),
    };
    let year = chrono::Local::now().year();

    match ccds::init_project(
        &root,
        &opts,
        &mut prompter,
        &templates,
        &Git::default(),
        year,
    ) {
        Ok(InitOutcome::Created(report)) => {
            println!(
                "Initialized {} project at {} ({} commits)",
                report.config.primary_language,
                root.display(),
                report.commits.len()
            );
        }
        Ok(InitOutcome::Declined) => {}
        Err(e) => fail(&e),
    }
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("ccds init: {e}");
    std::process::exit(1);
}
