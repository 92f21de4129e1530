use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use zbus::blocking::{Connection, Proxy};
use zbus::zvariant::{DynamicType, Type, Value};

use crate::client::{Client, ClientError, ClientResult, ErrorKind, HelperApp, Launcher};
use crate::config::Config;

const NO_REPLY_ERROR: &str = "org.freedesktop.DBus.Error.NoReply";
const APPLICATION_INTERFACE: &str = "org.freedesktop.Application";

impl From<zbus::Error> for ClientError {
    fn from(err: zbus::Error) -> Self {
        let kind = match &err {
            zbus::Error::MethodError(name, _, _) if name.as_str() == NO_REPLY_ERROR => {
                ErrorKind::NoReply
            }
            zbus::Error::FDO(fdo) if matches!(**fdo, zbus::fdo::Error::NoReply(_)) => {
                ErrorKind::NoReply
            }
            zbus::Error::InputOutput(_) | zbus::Error::Address(_) | zbus::Error::Handshake(_) => {
                ErrorKind::Transport
            }
            zbus::Error::MethodError(..) | zbus::Error::FDO(_) => ErrorKind::Remote,
            _ => ErrorKind::Protocol,
        };
        ClientError::new(kind, err.to_string())
    }
}

/// Session-bus client for the GPaste daemon and its helper applications.
pub struct DbusClient {
    conn: Connection,
    config: Config,
}

impl DbusClient {
    pub fn connect(config: Config) -> ClientResult<Self> {
        tracing::debug!(bus_name = %config.daemon.bus_name, "connecting to session bus");
        let conn = Connection::session()?;
        Ok(Self { conn, config })
    }

    fn daemon(&self) -> ClientResult<Proxy<'_>> {
        let daemon = &self.config.daemon;
        Ok(Proxy::new(
            &self.conn,
            daemon.bus_name.as_str(),
            daemon.object_path.as_str(),
            daemon.interface.as_str(),
        )?)
    }

    fn call<B, R>(&self, method: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + DynamicType,
        R: DeserializeOwned + Type,
    {
        tracing::debug!(method, "calling daemon");
        let reply = self.daemon()?.call(method, body);
        if let Err(e) = &reply {
            tracing::debug!(method, error = %e, "daemon call failed");
        }
        Ok(reply?)
    }
}

impl Client for DbusClient {
    fn add(&self, text: &str) -> ClientResult<()> {
        self.call("Add", &(text,))
    }

    fn add_file(&self, path: &str) -> ClientResult<()> {
        self.call("AddFile", &(path,))
    }

    fn add_password(&self, name: &str, password: &str) -> ClientResult<()> {
        self.call("AddPassword", &(name, password))
    }

    fn rename_password(&self, old_name: &str, new_name: &str) -> ClientResult<()> {
        self.call("RenamePassword", &(old_name, new_name))
    }

    fn set_password(&self, index: u32, name: &str) -> ClientResult<()> {
        self.call("SetPassword", &(index, name))
    }

    fn delete_password(&self, name: &str) -> ClientResult<()> {
        self.call("DeletePassword", &(name,))
    }

    fn get_element(&self, index: u32) -> ClientResult<String> {
        self.call("GetElement", &(index,))
    }

    fn get_raw_element(&self, index: u32) -> ClientResult<String> {
        self.call("GetRawElement", &(index,))
    }

    fn get_history(&self) -> ClientResult<Vec<String>> {
        self.call("GetHistory", &())
    }

    fn get_raw_history(&self) -> ClientResult<Vec<String>> {
        self.call("GetRawHistory", &())
    }

    fn get_history_size(&self) -> ClientResult<u32> {
        self.call("GetHistorySize", &())
    }

    fn search(&self, query: &str) -> ClientResult<Vec<u32>> {
        self.call("Search", &(query,))
    }

    fn list_histories(&self) -> ClientResult<Vec<String>> {
        self.call("ListHistories", &())
    }

    fn backup_history(&self, name: &str) -> ClientResult<()> {
        self.call("BackupHistory", &(name,))
    }

    fn switch_history(&self, name: &str) -> ClientResult<()> {
        self.call("SwitchHistory", &(name,))
    }

    fn delete_history(&self, name: &str) -> ClientResult<()> {
        self.call("DeleteHistory", &(name,))
    }

    fn select(&self, index: u32) -> ClientResult<()> {
        self.call("Select", &(index,))
    }

    fn delete(&self, index: u32) -> ClientResult<()> {
        self.call("Delete", &(index,))
    }

    fn empty(&self) -> ClientResult<()> {
        self.call("Empty", &())
    }

    fn track(&self, enabled: bool) -> ClientResult<()> {
        self.call("Track", &(enabled,))
    }

    fn reexecute(&self) -> ClientResult<()> {
        self.call("Reexecute", &())
    }

    fn daemon_version(&self) -> ClientResult<String> {
        tracing::debug!("reading daemon Version property");
        self.daemon()?
            .get_property::<String>("Version")
            .map_err(|e| ClientError::from(zbus::Error::from(e)))
    }

    fn show_history(&self) -> ClientResult<()> {
        self.call("ShowHistory", &())
    }

    fn about(&self) -> ClientResult<()> {
        self.call("About", &())
    }
}

impl Launcher for DbusClient {
    fn activate(&self, app: HelperApp) -> ClientResult<()> {
        let helpers = &self.config.helpers;
        let bus_name = helpers.bus_name(app.name());
        let object_path = helpers.object_path(app.name());
        tracing::debug!(%bus_name, %object_path, "activating helper");

        let proxy = Proxy::new(
            &self.conn,
            bus_name.as_str(),
            object_path.as_str(),
            APPLICATION_INTERFACE,
        )?;
        let platform_data: HashMap<&str, Value<'_>> = HashMap::new();
        let () = proxy.call("Activate", &(platform_data,))?;
        Ok(())
    }
}
