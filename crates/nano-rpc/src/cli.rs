use clap::{Parser, Subcommand};
use nano_rpc_core::types::BlockKind;

/// nano-rpc — call a Nano node's JSON RPC from the command line and print the
/// typed response as JSON.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC URL.
    #[arg(long, default_value = "http://127.0.0.1:7076", env = "NANO_RPC_URL")]
    pub url: String,

    /// Extra request header as `name:value` (repeatable). Overrides the
    /// default `content-type` when it has the same name.
    #[arg(
        long = "header",
        env = "NANO_RPC_HEADERS",
        value_delimiter = ',',
        value_parser = parse_header
    )]
    pub headers: Vec<(String, String)>,

    /// Print single-line JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Balance and pending amount of an account.
    AccountBalance { account: String },

    /// Balances of several accounts at once.
    AccountsBalances {
        #[arg(required = true)]
        accounts: Vec<String>,
    },

    AccountBlockCount { account: String },

    /// Account address for a hex public key.
    AccountGet { key: String },

    AccountHistory {
        account: String,
        #[arg(long)]
        count: Option<u64>,
        /// Include every block field.
        #[arg(long)]
        raw: bool,
        /// Start from this block hash.
        #[arg(long)]
        head: Option<String>,
        #[arg(long)]
        offset: Option<u64>,
        /// Walk from the open block forwards.
        #[arg(long)]
        reverse: bool,
        /// Only blocks to or from this account (repeatable).
        #[arg(long)]
        account_filter: Vec<String>,
    },

    AccountInfo {
        account: String,
        #[arg(long)]
        representative: bool,
        #[arg(long)]
        weight: bool,
        #[arg(long)]
        pending: bool,
    },

    AccountKey { account: String },

    AccountRepresentative { account: String },

    AccountWeight { account: String },

    AvailableSupply,

    Block { hash: String },

    Blocks {
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    BlockAccount { hash: String },

    BlockCount,

    BlocksInfo {
        #[arg(required = true)]
        hashes: Vec<String>,
        /// Include the source account of receive blocks.
        #[arg(long)]
        source: bool,
        /// Include whether sends are still pending.
        #[arg(long)]
        pending: bool,
    },

    BlockCountType,

    Chain {
        block: String,
        #[arg(long)]
        count: Option<u64>,
    },

    Frontiers {
        account: String,
        #[arg(long)]
        count: Option<u64>,
    },

    FrontiersCount,

    History {
        hash: String,
        #[arg(long)]
        count: Option<u64>,
    },

    MraiFromRaw { amount: String },
    MraiToRaw { amount: String },
    KraiFromRaw { amount: String },
    KraiToRaw { amount: String },
    RaiFromRaw { amount: String },
    RaiToRaw { amount: String },

    Ledger {
        account: String,
        #[arg(long)]
        count: Option<u64>,
        #[arg(long)]
        representative: bool,
        #[arg(long)]
        weight: bool,
        #[arg(long)]
        pending: bool,
        #[arg(long)]
        sorting: bool,
    },

    /// Have the node build and sign a block (not published).
    BlockCreate {
        #[arg(long = "type")]
        kind: BlockKind,
        #[arg(long)]
        key: String,
        #[arg(long)]
        account: String,
        #[arg(long)]
        representative: String,
        #[arg(long)]
        source: String,
    },

    /// Publish a signed block given as JSON text.
    Process { block: String },

    Representatives {
        #[arg(long)]
        count: Option<u64>,
        #[arg(long)]
        sorting: bool,
    },

    RepresentativesOnline,

    Peers,

    Version,

    /// Send any action with a JSON object of parameters and print the raw reply.
    Call {
        action: String,
        #[arg(long, default_value = "{}")]
        params: String,
    },
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("header `{raw}` must be formatted as name:value"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header `{raw}` has an empty name"));
    }
    Ok((name.to_owned(), value.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header_splits_on_first_colon() {
        assert_eq!(
            parse_header("Authorization: Bearer a:b"),
            Ok(("Authorization".to_owned(), "Bearer a:b".to_owned()))
        );
        assert!(parse_header("no-separator").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn cli_parses_account_history_flags() {
        let cli = Cli::try_parse_from([
            "nano-rpc",
            "--header",
            "x-api-key:k",
            "account-history",
            "nano_1abc",
            "--count",
            "2",
            "--raw",
        ])
        .expect("args must parse");

        assert_eq!(cli.headers, vec![("x-api-key".to_owned(), "k".to_owned())]);
        let Command::AccountHistory {
            account,
            count,
            raw,
            reverse,
            ..
        } = cli.command
        else {
            panic!("expected account-history subcommand");
        };
        assert_eq!(account, "nano_1abc");
        assert_eq!(count, Some(2));
        assert!(raw);
        assert!(!reverse);
    }

    #[test]
    fn cli_parses_block_create_type() {
        let cli = Cli::try_parse_from([
            "nano-rpc",
            "block-create",
            "--type",
            "open",
            "--key",
            "00",
            "--account",
            "nano_1a",
            "--representative",
            "nano_1r",
            "--source",
            "AB",
        ])
        .expect("args must parse");

        assert!(matches!(
            cli.command,
            Command::BlockCreate {
                kind: BlockKind::Open,
                ..
            }
        ));
    }
}
