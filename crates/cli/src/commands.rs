use clap::{Subcommand, ValueEnum};
use translator::{MutationKind, query::dialect::LockType};

#[derive(Subcommand)]
pub enum Commands {
    /// Compile an RQL statement into SQL
    Compile {
        #[arg(long, help = "Entity schema file (JSON)")]
        schema: String,

        #[arg(long, help = "RQL statement to compile")]
        query: String,

        #[arg(long, help = "Print the SQL and alias map as JSON")]
        json: bool,

        #[command(flatten)]
        dialect: DialectArgs,

        #[arg(long, help = "Offset of the first row to return")]
        start: Option<u64>,

        #[arg(long, help = "Maximum number of rows to return")]
        limit: Option<u64>,

        #[arg(long, value_enum, help = "Lock to take around the query")]
        lock: Option<LockArg>,

        #[arg(long, help = "Schema prefix for table locks")]
        lock_schema: Option<String>,
    },
    /// Generate an INSERT, UPDATE or DELETE for an entity record
    Mutate {
        #[arg(long, help = "Entity schema file (JSON)")]
        schema: String,

        #[arg(long, help = "Entity record file (JSON)")]
        record: String,

        /// insert, update or delete
        #[arg(long)]
        kind: MutationKind,

        #[command(flatten)]
        dialect: DialectArgs,

        #[arg(long, help = "Append the dialect's identifier-return clause to inserts")]
        returning: bool,
    },
    /// Validate a schema file and list its entities
    Schema {
        #[arg(long, help = "Entity schema file (JSON)")]
        schema: String,
    },
}

#[derive(clap::Args)]
pub struct DialectArgs {
    /// Target dialect: "postgres" or "mysql"
    #[arg(long, default_value = "postgres")]
    pub dialect: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LockArg {
    TableRead,
    TableWrite,
    RowRead,
    RowWrite,
}

impl From<LockArg> for LockType {
    fn from(arg: LockArg) -> Self {
        match arg {
            LockArg::TableRead => LockType::TableRead,
            LockArg::TableWrite => LockType::TableWrite,
            LockArg::RowRead => LockType::RowRead,
            LockArg::RowWrite => LockType::RowWrite,
        }
    }
}
