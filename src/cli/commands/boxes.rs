use crate::cli::parser::{BoxAction, Commands};
use crate::config::Config;
use crate::core::boxes::BoxLogic;
use crate::errors::AppResult;
use crate::provider::DataProvider;
use crate::ui::messages::{header, success};
use crate::utils::table::Table;

fn opt(n: Option<i64>) -> String {
    n.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Box { action } = cmd else {
        return Ok(());
    };
    let mut provider = DataProvider::new(cfg.database_path());

    match action {
        BoxAction::Add { number } => {
            let uri = BoxLogic::add(&mut provider, number)?;
            success(format!("Box {} added: {}", number.trim(), uri));
        }

        BoxAction::List => {
            let boxes = BoxLogic::list(&mut provider)?;
            if boxes.is_empty() {
                println!("No boxes yet.");
                return Ok(());
            }

            let mut table = Table::new(vec!["id".into(), "box".into()]);
            for b in boxes {
                table.add_row(vec![b.id.to_string(), b.box_number]);
            }
            print!("{}", table.render());
        }

        BoxAction::Show { id } => {
            let (nest_box, observations) = BoxLogic::show(&mut provider, *id)?;
            header(format!("Box {} (id {})", nest_box.box_number, nest_box.id));

            if observations.is_empty() {
                println!("No observations for this box.");
                return Ok(());
            }

            let mut table = Table::new(
                ["id", "date", "laid", "missing", "destroyed", "non-viable", "problem"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            );
            for o in &observations {
                table.add_row(vec![
                    o.id.to_string(),
                    o.date_str(&cfg.date_format),
                    opt(o.eggs_laid),
                    opt(o.eggs_missing),
                    opt(o.eggs_destroyed),
                    opt(o.eggs_non_viable),
                    o.problem.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
