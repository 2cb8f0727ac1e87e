use crate::{
    commands::{Commands, DialectArgs},
    error::CliError,
};
use clap::Parser;
use model::entity::{EntityRegistry, Record, Schema};
use serde::Serialize;
use tracing::info;
use translator::{
    MutationKind, ResultAliasMap, Translator,
    query::dialect::{Dialect, LockType, dialect_for},
};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "rql", version = "0.1.0", about = "RQL to SQL translator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// JSON shape of `compile --json`.
#[derive(Serialize)]
struct CompileReport<'a> {
    dialect: String,
    statements: &'a [String],
    aliases: &'a ResultAliasMap,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            schema,
            query,
            json,
            dialect,
            start,
            limit,
            lock,
            lock_schema,
        } => {
            let registry = Schema::from_path(&schema)?;
            let dialect = resolve_dialect(&dialect)?;
            let compiled = Translator::new(&registry).compile(&query)?;

            let mut sql = dialect.paginate(&compiled.sql, start, limit);
            let mut statements = Vec::new();
            match lock.map(LockType::from) {
                Some(lock @ (LockType::RowRead | LockType::RowWrite)) => {
                    sql = format!("{} {}", sql, dialect.lock(lock, &[], None));
                }
                Some(lock) => {
                    let tables: Vec<&str> = compiled
                        .aliases
                        .values()
                        .filter_map(|target| registry.lookup(&target.entity))
                        .map(|config| config.table.as_str())
                        .collect();
                    statements.push(dialect.lock(lock, &tables, lock_schema.as_deref()));
                }
                None => {}
            }
            statements.push(sql);

            if json {
                output::print_json(&CompileReport {
                    dialect: dialect.name(),
                    statements: &statements,
                    aliases: &compiled.aliases,
                })?;
            } else {
                output::print_lines(&statements);
            }
        }
        Commands::Mutate {
            schema,
            record,
            kind,
            dialect,
            returning,
        } => {
            let registry = Schema::from_path(&schema)?;
            let dialect = resolve_dialect(&dialect)?;
            let source = std::fs::read_to_string(&record)?;
            let record: Record = serde_json::from_str(&source)?;

            let mut sql = Translator::new(&registry).entity_to_sql(&record, kind)?;
            if returning && kind == MutationKind::Insert {
                let id_column = registry
                    .lookup(&record.entity)
                    .and_then(|config| config.id_column());
                if let Some(id) = id_column {
                    let clause = dialect.insert_returning(id.column_name());
                    if !clause.is_empty() {
                        sql = format!("{} {}", sql, clause);
                    }
                }
            }
            output::print_lines(&[sql]);
        }
        Commands::Schema { schema } => {
            let registry = Schema::from_path(&schema)?;
            info!("Schema '{}' is valid ({} entities)", schema, registry.len());
            for name in registry.entity_names() {
                if let Some(config) = registry.lookup(name) {
                    println!("{} -> {} ({} columns)", name, config.table, config.columns.len());
                }
            }
        }
    }

    Ok(())
}

fn resolve_dialect(args: &DialectArgs) -> Result<Box<dyn Dialect>, CliError> {
    dialect_for(&args.dialect).ok_or_else(|| CliError::UnsupportedDialect(args.dialect.clone()))
}
