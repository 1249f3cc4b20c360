//! One-shot commands: eval, convert, units

use anyhow::{bail, Context, Result};
use colored::*;
use ganit_calc::{AngleUnit, CalcEngine, ErrorKind};
use ganit_session::{delocalize, localize, parse_number, GanitConfig, Labels};
use ganit_units::{convert as convert_value, format_conversion, Category, Unit};
use tracing::info;

/// Localized name of a conversion category
pub fn category_label(category: Category, labels: &Labels) -> &'static str {
    match category {
        Category::Length => labels.length,
        Category::Weight => labels.weight,
        Category::Temperature => labels.temperature,
        Category::Data => labels.data,
    }
}

pub fn eval(config: &GanitConfig, expression: &str, degrees: bool) -> Result<()> {
    let mut engine_config = config.engine_config();
    if degrees {
        engine_config.angle_unit = AngleUnit::Degrees;
    }
    let engine = CalcEngine::new(engine_config);
    let lang = config.language;

    match engine.evaluate(&delocalize(expression)) {
        Ok(value) => {
            println!("{}", localize(&value, lang).bright_green());
            Ok(())
        },
        Err(e) => {
            let kind = match e.kind() {
                ErrorKind::Syntax => "syntax error",
                ErrorKind::Math => "math error",
            };
            eprintln!("{} {} ({})", lang.labels().error.red().bold(), kind, e);
            std::process::exit(1);
        },
    }
}

/// Both units must share a category
pub fn resolve_pair(from: &str, to: &str) -> Result<(Unit, Unit, Category)> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    let category = from.category();
    if to.category() != category {
        bail!(
            "Cannot convert {} ({}) to {} ({})",
            from,
            category,
            to,
            to.category()
        );
    }
    Ok((from, to, category))
}

pub fn convert(config: &GanitConfig, value: &str, from: &str, to: &str) -> Result<()> {
    let (from, to, category) = resolve_pair(from, to)?;
    let number = parse_number(&delocalize(value))
        .with_context(|| format!("Not a number: {}", value))?;

    let result = format_conversion(convert_value(number, from, to, category));
    info!(%category, %from, %to, number, %result, "converted");

    let lang = config.language;
    println!(
        "{} {} = {} {}",
        localize(&format_conversion(number), lang),
        from.to_string().bright_cyan(),
        localize(&result, lang).bright_green(),
        to.to_string().bright_cyan()
    );
    Ok(())
}

pub fn units(config: &GanitConfig, category: Option<&str>) -> Result<()> {
    let labels = config.language.labels();

    let categories: Vec<Category> = match category {
        Some(name) => vec![name.parse()?],
        None => Category::ALL.to_vec(),
    };

    println!("{}", format!("=== {} ===", labels.converter).bright_cyan());
    for category in categories {
        let (from, to) = category.default_pair();
        let symbols: Vec<&str> = category.units().iter().map(|u| u.symbol()).collect();

        println!();
        println!(
            "  {} ({})",
            category_label(category, labels).bright_yellow(),
            category
        );
        println!("    Units:    {}", symbols.join(" "));
        println!("    Default:  {} → {}", from, to);

        // Temperature is affine and has no rates
        for unit in category.units() {
            if let Some(rate) = unit.rate() {
                println!("    {:<9} {}", unit.symbol(), format_conversion(rate));
            }
        }
    }
    println!();
    Ok(())
}
