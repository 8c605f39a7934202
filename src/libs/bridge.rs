//! Method dispatch for the desktop UI.
//!
//! The UI calls named methods with a positional JSON argument list. Each
//! request is one line of JSON, and so is each response:
//!
//! ```text
//! {"id":1,"method":"CreateTodo","args":[{"title":"Buy milk"}]}
//! {"id":1,"result":1}
//! {"id":2,"method":"UpdateTodo","args":[99,{"title":"x"}]}
//! {"id":2,"error":{"kind":"not_found","message":"Todo with ID 99 not found"}}
//! ```

use super::activity::{Activity, ActivityPatch, ActivityQuery};
use super::error::{Error, Result};
use super::messages::Message;
use super::todo::{Todo, TodoPatch, TodoQuery};
use crate::db::{activities::Activities, db::Db, todos::Todos};
use crate::{msg_debug, msg_error, msg_warning};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every method the bridge answers, in the order the UI binds them.
pub const METHODS: &[&str] = &[
    "GetActivities",
    "GetTodayActivities",
    "CreateActivity",
    "UpdateActivity",
    "DeleteActivity",
    "GetTodos",
    "CreateTodo",
    "UpdateTodo",
    "DeleteTodo",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        ErrorBody { kind: error.kind(), message: error.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response {
    fn reply(id: Value, outcome: Result<Value>) -> Self {
        match outcome {
            Ok(result) => Response { id, result: Some(result), error: None },
            Err(error) => Response { id, result: None, error: Some(ErrorBody::from(&error)) },
        }
    }
}

pub struct Bridge {
    activities: Activities,
    todos: Todos,
}

impl Bridge {
    pub fn new(db: Db) -> Result<Self> {
        Ok(Bridge { activities: Activities::new(db.clone())?, todos: Todos::new(db)? })
    }

    pub fn activities(&self) -> &Activities {
        &self.activities
    }

    pub fn todos(&self) -> &Todos {
        &self.todos
    }

    /// Invoke `method` with positional `args`.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        msg_debug!(Message::BridgeCall(method.to_string()));
        match method {
            "GetActivities" => {
                let query: Option<ActivityQuery> = optional_arg(args, 0)?;
                to_value(self.activities.list(query.as_ref())?)
            }
            "GetTodayActivities" => to_value(self.activities.list_today()?),
            "CreateActivity" => {
                let activity: Activity = arg(args, 0, "activity")?;
                to_value(self.activities.create(&activity)?)
            }
            "UpdateActivity" => {
                let id: i64 = arg(args, 0, "id")?;
                let patch: ActivityPatch = arg(args, 1, "patch")?;
                self.activities.update(id, &patch)?;
                Ok(Value::Null)
            }
            "DeleteActivity" => {
                self.activities.delete(arg(args, 0, "id")?)?;
                Ok(Value::Null)
            }
            "GetTodos" => {
                let query: Option<TodoQuery> = optional_arg(args, 0)?;
                to_value(self.todos.list(query.as_ref())?)
            }
            "CreateTodo" => {
                let todo: Todo = arg(args, 0, "todo")?;
                to_value(self.todos.create(&todo)?)
            }
            "UpdateTodo" => {
                let id: i64 = arg(args, 0, "id")?;
                let patch: TodoPatch = arg(args, 1, "patch")?;
                self.todos.update(id, &patch)?;
                Ok(Value::Null)
            }
            "DeleteTodo" => {
                self.todos.delete(arg(args, 0, "id")?)?;
                Ok(Value::Null)
            }
            unknown => {
                msg_warning!(Message::BridgeUnknownMethod(unknown.to_string()));
                Err(Error::InvalidRequest(format!("unknown method '{}'", unknown)))
            }
        }
    }

    /// Answer a decoded request.
    pub fn handle(&self, request: Request) -> Response {
        let outcome = self.call(&request.method, &request.args);
        if let Err(error) = &outcome {
            msg_error!(Message::BridgeCallFailed(request.method.clone(), error.to_string()));
        }
        Response::reply(request.id, outcome)
    }

    /// Answer one line of the JSON-lines protocol.
    pub fn handle_line(&self, line: &str) -> Result<String> {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                msg_warning!(Message::BridgeMalformedRequest(e.to_string()));
                Response::reply(Value::Null, Err(Error::InvalidRequest(e.to_string())))
            }
        };
        Ok(serde_json::to_string(&response)?)
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn arg<T: DeserializeOwned>(args: &[Value], index: usize, name: &str) -> Result<T> {
    let value = args
        .get(index)
        .ok_or_else(|| Error::InvalidRequest(format!("missing argument {} ({})", index, name)))?;
    T::deserialize(value).map_err(|e| Error::InvalidRequest(format!("argument {} ({}): {}", index, name, e)))
}

/// An argument that may be absent or `null`.
fn optional_arg<T: DeserializeOwned>(args: &[Value], index: usize) -> Result<Option<T>> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| Error::InvalidRequest(format!("argument {}: {}", index, e))),
    }
}
