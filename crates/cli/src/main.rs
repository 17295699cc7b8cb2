use packrip_core::{open_booster, DrawnCard, RngState, SetFamily};
use packrip_data::{
    load_catalog, product_for, set_id_or_default, validate_catalog, PACK_PRODUCTS,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone)]
struct CliOptions {
    cards_dir: PathBuf,
    set_code: Option<String>,
    count: u32,
    seed: Option<u64>,
    json: bool,
    list: bool,
}

const USAGE: &str = "usage: packrip <cards-dir> [set-code] [--count N] [--seed S] [--json] [--list]";

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut cards_dir = None;
    let mut set_code = None;
    let mut count = 1u32;
    let mut seed = None;
    let mut json = false;
    let mut list = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" => {
                let value = iter.next().ok_or("--count needs a value")?;
                count = value
                    .parse()
                    .map_err(|_| format!("invalid --count value '{value}'"))?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value '{value}'"))?,
                );
            }
            "--json" => json = true,
            "--list" => list = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{other}'"));
            }
            other => {
                if cards_dir.is_none() {
                    cards_dir = Some(PathBuf::from(other));
                } else if set_code.is_none() {
                    set_code = Some(other.to_ascii_uppercase());
                } else {
                    return Err(format!("unexpected argument '{other}'"));
                }
            }
        }
    }

    let cards_dir = cards_dir.ok_or("missing <cards-dir>")?;
    if set_code.is_none() && !list {
        return Err("missing [set-code] (or pass --list)".to_string());
    }
    Ok(CliOptions {
        cards_dir,
        set_code,
        count,
        seed,
        json,
        list,
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    if options.list {
        print_products(options.json)?;
    }
    let Some(set_code) = options.set_code.as_deref() else {
        return Ok(());
    };
    let catalog = load_catalog(&options.cards_dir)?;
    validate_catalog(&catalog)?;

    let set_id = set_id_or_default(set_code);
    let family = SetFamily::from_set_id(set_id);
    let mut rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    log::debug!("rng seed {}", rng.seed());

    let mut packs = Vec::with_capacity(options.count as usize);
    for _ in 0..options.count {
        packs.push(open_booster(&catalog, set_code, set_id, &mut rng)?);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&packs)?);
        return Ok(());
    }
    let set_name = product_for(set_code)
        .map(|product| product.name)
        .unwrap_or_else(|| family.display_name());
    for (index, pack) in packs.iter().enumerate() {
        println!(
            "pack {} of {}: {} ({})",
            index + 1,
            packs.len(),
            set_code,
            set_name
        );
        for card in pack {
            print_card(card);
        }
        if index + 1 < packs.len() {
            println!();
        }
    }
    Ok(())
}

fn print_card(card: &DrawnCard) {
    println!("  {:<10} {:<30} {}", card.id, card.name, card.rarity);
}

fn print_products(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(PACK_PRODUCTS)?);
        return Ok(());
    }
    for product in PACK_PRODUCTS {
        println!("  {:<8} {:<28} {} coins", product.code, product.name, product.cost);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_positional_and_flag_arguments() {
        let options = parse_args(&args(&[
            "assets/cards",
            "sv1",
            "--count",
            "3",
            "--seed",
            "7",
            "--json",
        ]))
        .expect("valid arguments");
        assert_eq!(options.cards_dir, PathBuf::from("assets/cards"));
        assert_eq!(options.set_code.as_deref(), Some("SV1"));
        assert_eq!(options.count, 3);
        assert_eq!(options.seed, Some(7));
        assert!(options.json);
        assert!(!options.list);
    }

    #[test]
    fn list_does_not_require_a_set_code() {
        let options = parse_args(&args(&["assets/cards", "--list"])).expect("valid arguments");
        assert!(options.list);
        assert!(options.set_code.is_none());
    }

    #[test]
    fn rejects_missing_and_unknown_arguments() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["assets/cards"])).is_err());
        assert!(parse_args(&args(&["assets/cards", "SV1", "--bogus"])).is_err());
        assert!(parse_args(&args(&["assets/cards", "SV1", "--count", "x"])).is_err());
    }

    #[test]
    fn unknown_set_codes_fall_back_to_the_unknown_family() {
        let id = set_id_or_default("XY1");
        assert_eq!(SetFamily::from_set_id(id), SetFamily::Unknown);
    }
}
