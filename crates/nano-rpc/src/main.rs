mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use nano_rpc_core::types::{
    AccountHistoryOptions, AccountInfoOptions, BlockCreateRequest, LedgerOptions,
};
use nano_rpc_core::{ClientConfig, NodeClient, RpcError};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = args
        .headers
        .iter()
        .fold(ClientConfig::new(&args.url), |config, (name, value)| {
            config.header(name, value)
        });
    let rpc = NodeClient::new(config).context("configure node client")?;
    tracing::debug!(url = %args.url, headers = args.headers.len(), "node client ready");

    let output = run(&rpc, args.command).await.map_err(|err| {
        let message = format_rpc_error(&args.url, &err);
        eyre!(message).wrap_err("while calling the node RPC")
    })?;

    let rendered = if args.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("render response")?;
    println!("{rendered}");

    Ok(())
}

/// Dispatch one subcommand to its client method and return the response as JSON.
async fn run(rpc: &NodeClient, command: Command) -> Result<Value, RpcError> {
    match command {
        Command::AccountBalance { account } => to_json(rpc.account_balance(&account).await?),
        Command::AccountsBalances { accounts } => {
            to_json(rpc.accounts_balances(&as_strs(&accounts)).await?)
        }
        Command::AccountBlockCount { account } => {
            to_json(rpc.account_block_count(&account).await?)
        }
        Command::AccountGet { key } => to_json(rpc.account_get(&key).await?),
        Command::AccountHistory {
            account,
            count,
            raw,
            head,
            offset,
            reverse,
            account_filter,
        } => {
            let options = AccountHistoryOptions {
                raw,
                head,
                offset,
                reverse,
                account_filter: (!account_filter.is_empty()).then_some(account_filter),
            };
            to_json(rpc.account_history(&account, count, &options).await?)
        }
        Command::AccountInfo {
            account,
            representative,
            weight,
            pending,
        } => {
            let options = AccountInfoOptions {
                representative,
                weight,
                pending,
            };
            to_json(rpc.account_info(&account, &options).await?)
        }
        Command::AccountKey { account } => to_json(rpc.account_key(&account).await?),
        Command::AccountRepresentative { account } => {
            to_json(rpc.account_representative(&account).await?)
        }
        Command::AccountWeight { account } => to_json(rpc.account_weight(&account).await?),
        Command::AvailableSupply => to_json(rpc.available_supply().await?),
        Command::Block { hash } => to_json(rpc.block(&hash).await?),
        Command::Blocks { hashes } => to_json(rpc.blocks(&as_strs(&hashes)).await?),
        Command::BlockAccount { hash } => to_json(rpc.block_account(&hash).await?),
        Command::BlockCount => to_json(rpc.block_count().await?),
        Command::BlocksInfo {
            hashes,
            source,
            pending,
        } => to_json(rpc.blocks_info(&as_strs(&hashes), source, pending).await?),
        Command::BlockCountType => to_json(rpc.block_count_type().await?),
        Command::Chain { block, count } => to_json(rpc.chain(&block, count).await?),
        Command::Frontiers { account, count } => to_json(rpc.frontiers(&account, count).await?),
        Command::FrontiersCount => to_json(rpc.frontiers_count().await?),
        Command::History { hash, count } => to_json(rpc.history(&hash, count).await?),
        Command::MraiFromRaw { amount } => to_json(rpc.mrai_from_raw(amount).await?),
        Command::MraiToRaw { amount } => to_json(rpc.mrai_to_raw(amount).await?),
        Command::KraiFromRaw { amount } => to_json(rpc.krai_from_raw(amount).await?),
        Command::KraiToRaw { amount } => to_json(rpc.krai_to_raw(amount).await?),
        Command::RaiFromRaw { amount } => to_json(rpc.rai_from_raw(amount).await?),
        Command::RaiToRaw { amount } => to_json(rpc.rai_to_raw(amount).await?),
        Command::Ledger {
            account,
            count,
            representative,
            weight,
            pending,
            sorting,
        } => {
            let options = LedgerOptions {
                representative,
                weight,
                pending,
                sorting,
            };
            to_json(rpc.ledger(&account, count, &options).await?)
        }
        Command::BlockCreate {
            kind,
            key,
            account,
            representative,
            source,
        } => {
            let request = BlockCreateRequest {
                kind,
                key,
                account,
                representative,
                source,
            };
            to_json(rpc.block_create(&request).await?)
        }
        Command::Process { block } => to_json(rpc.process(&block).await?),
        Command::Representatives { count, sorting } => {
            to_json(rpc.representatives(count, sorting).await?)
        }
        Command::RepresentativesOnline => to_json(rpc.representatives_online().await?),
        Command::Peers => to_json(rpc.peers().await?),
        Command::Version => to_json(rpc.version().await?),
        Command::Call { action, params } => {
            let params: Value = serde_json::from_str(&params).map_err(RpcError::Serialization)?;
            rpc.call_value(&action, &params).await
        }
    }
}

fn to_json<T: serde::Serialize>(response: T) -> Result<Value, RpcError> {
    serde_json::to_value(response).map_err(RpcError::Serialization)
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

fn format_rpc_error(url: &str, err: &RpcError) -> String {
    let source_error = err.to_string();
    let mut lines = vec![format!("RPC call to `{url}` failed: {source_error}")];

    match err {
        RpcError::Transport(transport) if transport.is_connect() => {
            lines.push(
                "hint: connection failed; verify the node is running and its RPC server is enabled"
                    .into(),
            );
        }
        RpcError::Transport(transport) if transport.is_timeout() => {
            lines.push(
                "hint: the node did not answer in time; it may still be bootstrapping".into(),
            );
        }
        RpcError::Transport(_)
            if source_error.contains("dns error")
                || source_error.contains("Could not resolve host") =>
        {
            lines.push(
                "hint: hostname resolution failed; verify the node hostname and your DNS/network"
                    .into(),
            );
        }
        RpcError::Transport(_)
            if source_error.contains("tls") || source_error.contains("certificate") =>
        {
            lines.push(
                "hint: TLS handshake failed; verify certificate trust and that the node uses HTTPS"
                    .into(),
            );
        }
        RpcError::Node(node) if node.message() == Some("Unknown command") => {
            lines.push(
                "hint: the node does not recognise this action; check its version and RPC settings"
                    .into(),
            );
        }
        RpcError::InvalidResponse(message)
            if message.contains("HTTP 401") || message.contains("HTTP 403") =>
        {
            lines.push("hint: authentication failed; pass credentials with --header".into());
        }
        RpcError::InvalidResponse(message) if message.contains("HTTP 404") => {
            lines.push("hint: endpoint path is invalid; verify the full RPC URL".into());
        }
        _ => {}
    }

    lines.join("\n")
}
