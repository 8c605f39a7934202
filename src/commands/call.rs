use crate::db::db::Db;
use crate::libs::bridge::{Bridge, METHODS};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use clap::Args;
use serde_json::Value;

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Method name, e.g. GetTodos
    method: String,

    /// JSON array of positional arguments, e.g. '[{"where":{"status":{"eq":"done"}}}]'
    args: Option<String>,
}

pub fn cmd(args: CallArgs) -> Result<()> {
    if !METHODS.contains(&args.method.as_str()) {
        msg_bail_anyhow!(Message::BridgeUnknownMethod(args.method));
    }

    let call_args = match args.args.as_deref() {
        None => Vec::new(),
        Some(raw) => match serde_json::from_str::<Value>(raw)
            .map_err(|e| msg_error_anyhow!(Message::BridgeMalformedRequest(e.to_string())))?
        {
            Value::Array(values) => values,
            single => vec![single],
        },
    };

    let bridge = Bridge::new(Db::new()?)?;
    let result = bridge.call(&args.method, &call_args)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
