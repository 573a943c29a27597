//! Arsenal - weapon catalog inspector
//!
//! Loads the weapon catalog, then lists it, validates it, or shows how a
//! single weapon resolves with a given ammo load and firing mode.

use std::path::PathBuf;
use std::sync::Arc;

use battle_arsenal::core::config::ArsenalConfig;
use battle_arsenal::core::error::Result;
use battle_arsenal::core::types::{Hexes, RangeBand, RangeTable};
use battle_arsenal::weapons::ammo::{AmmoFamily, AmmoType, Munition};
use battle_arsenal::weapons::battleforce::{
    alpha_strike_heat, battle_force_damage_by_band, round_attack_value,
};
use battle_arsenal::weapons::bay::{bay_type, BayType};
use battle_arsenal::weapons::damage::{
    damage_at, fire_target, max_range, resolve_damage, DamageResolution, FireTarget,
};
use battle_arsenal::weapons::descriptor::WeaponDescriptor;
use battle_arsenal::weapons::dispatch::HandlerKind;
use battle_arsenal::weapons::flags::{AmmoFlag, FlagDomain};
use battle_arsenal::weapons::mounted::{MountedAmmo, MountedWeapon};
use battle_arsenal::weapons::range::{at_ranges, ranges, water_ranges};
use battle_arsenal::weapons::registry::WeaponRegistry;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Weapon catalog inspector
#[derive(Parser, Debug)]
#[command(name = "arsenal")]
#[command(about = "Inspect and validate the weapon type catalog")]
struct Args {
    /// Config file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog directory, overriding the config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every weapon type in the catalog
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show how a weapon resolves with an ammo load and firing mode
    Show {
        /// Any name of the weapon type
        name: String,

        /// Loaded ammo family; defaults to the weapon's own when munitions are given
        #[arg(long)]
        ammo: Option<AmmoFamily>,

        /// Munition sub-type of the loaded ammo (repeatable)
        #[arg(long = "munition")]
        munitions: Vec<Munition>,

        /// Ammo flag of the loaded ammo (repeatable)
        #[arg(long = "ammo-flag")]
        ammo_flags: Vec<AmmoFlag>,

        /// Firing mode
        #[arg(long)]
        mode: Option<String>,

        /// Fire in bearings-only mode
        #[arg(long)]
        bearings_only: bool,

        /// Group sub-capital weapons into full capital bays
        #[arg(long)]
        capital_only: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Load the catalog and report problems
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    internal_name: &'a str,
    ammo_family: AmmoFamily,
}

/// Everything `show` reports about one weapon
#[derive(Serialize)]
struct WeaponReport<'a> {
    name: &'a str,
    internal_name: &'a str,
    mode: Option<&'a str>,
    ammo: Option<&'a AmmoType>,
    heat: i32,
    modes: &'a [String],
    ranges: RangeTable,
    water_ranges: [Hexes; 5],
    at_ranges: [Hexes; 4],
    attack_values: [i32; 4],
    max_range: RangeBand,
    damage: DamageResolution,
    damage_by_band: [i32; 4],
    fire_target: FireTarget,
    bay: BayType,
    handler: HandlerKind,
    battle_force: [f64; 4],
    alpha_strike_heat: i32,
    flags: Vec<&'static str>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ArsenalConfig::from_toml_file(path)?,
        None => ArsenalConfig::new(),
    };
    if let Some(catalog) = &args.catalog {
        config.catalog_dir = catalog.clone();
    }
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Loading weapon catalog from {}", config.catalog_dir.display());
    let registry = WeaponRegistry::load_directory(&config.catalog_dir, &config)?;

    match args.command {
        Command::List { format } => list(&registry, format),
        Command::Show {
            name,
            ammo,
            munitions,
            ammo_flags,
            mode,
            bearings_only,
            capital_only,
            format,
        } => {
            let descriptor = registry.lookup(&name)?;
            let mut weapon = MountedWeapon::new(Arc::clone(descriptor));
            if let Some(mode) = &mode {
                weapon.set_mode(mode)?;
            }
            weapon.set_bearings_only(bearings_only);

            let family = ammo.or_else(|| {
                (!munitions.is_empty() || !ammo_flags.is_empty())
                    .then_some(descriptor.ammo_family)
            });
            if let Some(family) = family {
                let mut ammo_type = AmmoType::new(family);
                for munition in munitions {
                    ammo_type = ammo_type.with_munition(munition);
                }
                for flag in ammo_flags {
                    ammo_type = ammo_type.with_flag(flag);
                }
                weapon.link_ammo(MountedAmmo::new(ammo_type, 1));
            }

            show(&weapon, capital_only, format)
        }
        Command::Validate => {
            println!(
                "Catalog OK: {} weapon types in {}",
                registry.len(),
                config.catalog_dir.display()
            );
            Ok(())
        }
    }
}

fn list(registry: &WeaponRegistry, format: OutputFormat) -> Result<()> {
    let entries: Vec<ListEntry<'_>> = registry
        .iter()
        .map(|w| ListEntry {
            name: &w.name,
            internal_name: &w.internal_name,
            ammo_family: w.ammo_family,
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!(
                    "{:<36} {:<36} {}",
                    entry.name, entry.internal_name, entry.ammo_family
                );
            }
            println!("{} weapon types", entries.len());
        }
    }
    Ok(())
}

fn report<'a>(weapon: &'a MountedWeapon, capital_only: bool) -> WeaponReport<'a> {
    let descriptor: &WeaponDescriptor = weapon.descriptor();
    let resolved = ranges(weapon);
    WeaponReport {
        name: &descriptor.name,
        internal_name: &descriptor.internal_name,
        mode: weapon.current_mode(),
        ammo: weapon.linked_ammo().map(MountedAmmo::ammo_type),
        heat: descriptor.heat,
        modes: &descriptor.modes,
        ranges: resolved,
        water_ranges: water_ranges(descriptor),
        at_ranges: at_ranges(descriptor),
        attack_values: RangeBand::ALL.map(|band| round_attack_value(descriptor, band)),
        max_range: max_range(weapon),
        damage: resolve_damage(descriptor, resolved.short),
        damage_by_band: RangeBand::ALL.map(|band| damage_at(descriptor, resolved.limit(band))),
        fire_target: fire_target(descriptor),
        bay: bay_type(descriptor, capital_only),
        handler: HandlerKind::for_weapon(descriptor),
        battle_force: battle_force_damage_by_band(descriptor),
        alpha_strike_heat: alpha_strike_heat(descriptor),
        flags: descriptor.flags.iter().map(FlagDomain::name).collect(),
    }
}

fn show(weapon: &MountedWeapon, capital_only: bool, format: OutputFormat) -> Result<()> {
    let report = report(weapon, capital_only);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("{} ({})", report.name, report.internal_name);
            if let Some(mode) = report.mode {
                println!("  Mode:          {}", mode);
            }
            if let Some(ammo) = report.ammo {
                let munitions: Vec<&str> = ammo.munitions.iter().map(FlagDomain::name).collect();
                println!("  Ammo:          {} {:?}", ammo.family, munitions);
            }
            println!("  Heat:          {}", report.heat);
            if !report.modes.is_empty() {
                println!("  Modes:         {}", report.modes.join(", "));
            }
            println!("  Ranges:        {:?}", report.ranges.as_array());
            println!("  Water ranges:  {:?}", report.water_ranges);
            println!("  AT2 ranges:    {:?}", report.at_ranges);
            println!("  Attack values: {:?}", report.attack_values);
            println!("  Max range:     {}", report.max_range.name());
            println!("  Damage:        {:?}", report.damage);
            println!("  Damage/band:   {:?}", report.damage_by_band);
            println!("  Fire TN:       {:?}", report.fire_target);
            println!("  Bay:           {}", report.bay);
            println!("  Handler:       {}", report.handler);
            println!(
                "  BattleForce:   S {:.2} M {:.2} L {:.2} E {:.2}",
                report.battle_force[0],
                report.battle_force[1],
                report.battle_force[2],
                report.battle_force[3]
            );
            println!("  AS heat:       {}", report.alpha_strike_heat);
            println!("  Flags:         {}", report.flags.join(", "));
        }
    }
    Ok(())
}
