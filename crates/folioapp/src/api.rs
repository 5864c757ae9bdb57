//! # API Facade
//!
//! The single entry point for every folio operation, whatever the UI.
//!
//! The facade owns both backends, built once with explicit configuration, and picks one
//! per call from the caller's [`BackendKind`]. It dispatches to `commands/*` and returns
//! their structured [`CmdResult`]; it never prints and holds no business logic.
//!
//! ## Generic Over the Substrates
//!
//! `FolioApi<K, T>` is generic over the key/value store under the local backend and the
//! HTTP transport under the remote one:
//! - Production: `FolioApi<FsKv, ReqwestTransport>`
//! - Testing: `FolioApi<MemKv, StubTransport>`

use crate::codec::RawItem;
use crate::commands;
use crate::error::Result;
use crate::model::BackendKind;
use crate::secret::{self, SecretSource};
use crate::store::http::HttpTransport;
use crate::store::kv::KeyValueStore;
use crate::store::local::LocalStore;
use crate::store::remote::RemoteStore;
use crate::store::Backend;

pub struct FolioApi<K: KeyValueStore, T: HttpTransport> {
    local: LocalStore<K>,
    remote: RemoteStore<T>,
    secret_source: SecretSource,
}

impl<K: KeyValueStore, T: HttpTransport> FolioApi<K, T> {
    pub fn new(local: LocalStore<K>, remote: RemoteStore<T>, secret_source: SecretSource) -> Self {
        Self {
            local,
            remote,
            secret_source,
        }
    }

    pub fn backend(&self, kind: BackendKind) -> &dyn Backend {
        match kind {
            BackendKind::Local => &self.local,
            BackendKind::Remote => &self.remote,
        }
    }

    pub fn local(&self) -> &LocalStore<K> {
        &self.local
    }

    pub fn remote(&self) -> &RemoteStore<T> {
        &self.remote
    }

    pub fn create_item(&self, kind: BackendKind, raw: RawItem) -> Result<CmdResult> {
        commands::create::run(self.backend(kind), raw)
    }

    pub fn update_item(&self, kind: BackendKind, target: &str, raw: RawItem) -> Result<CmdResult> {
        commands::update::run(self.backend(kind), target, raw)
    }

    pub fn delete_item(&self, kind: BackendKind, target: &str) -> Result<CmdResult> {
        commands::delete::run(self.backend(kind), target)
    }

    pub fn list_items(&self, kind: BackendKind) -> Result<CmdResult> {
        commands::list::run(self.backend(kind))
    }

    pub fn render_cards(&self, kind: BackendKind) -> Result<CmdResult> {
        commands::render::run(self.backend(kind))
    }

    /// Stores a master key override. It takes effect from the next context build.
    pub fn set_secret(&self, value: &str) -> Result<CmdResult> {
        let stored = secret::write_override(self.local.kv(), value)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Master key saved ({}).",
            stored.hint()
        )));
        if self.secret_source == SecretSource::EnvFile {
            result.add_message(CmdMessage::warning(
                "An env file also provides a master key and takes precedence over the saved one.",
            ));
        }
        Ok(result)
    }

    pub fn clear_secret(&self) -> Result<CmdResult> {
        secret::clear_override(self.local.kv())?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Saved master key removed."));
        Ok(result)
    }

    /// Reports where the active master key came from, without revealing it.
    pub fn secret_status(&self) -> CmdResult {
        let mut result = CmdResult::default();
        let message = match self.secret_source {
            SecretSource::None => {
                CmdMessage::warning("No master key configured; remote requests are unauthenticated.")
            }
            source => CmdMessage::info(format!("Master key loaded from {}.", source)),
        };
        result.add_message(message);
        result.add_message(CmdMessage::info(format!(
            "Remote endpoint: {}",
            self.remote.endpoint()
        )));
        result
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::Secret;
    use crate::store::http::StubTransport;
    use crate::store::mem_kv::MemKv;

    fn raw(title: &str) -> RawItem {
        RawItem {
            title: Some(title.into()),
            img_src: Some("i.png".into()),
            description: Some("d".into()),
            href: Some("/h".into()),
            ..Default::default()
        }
    }

    fn api(transport: StubTransport) -> FolioApi<MemKv, StubTransport> {
        FolioApi::new(
            LocalStore::new(MemKv::new()),
            RemoteStore::new(transport, "https://example.com/b/1", Secret::new("s3cr3t-value")),
            SecretSource::LocalOverride,
        )
    }

    #[test]
    fn local_kind_dispatches_to_local_store() {
        let api = api(StubTransport::new());
        api.create_item(BackendKind::Local, raw("A")).unwrap();
        assert_eq!(api.local().read().unwrap().len(), 1);
        assert!(api.remote().transport().requests().is_empty());
    }

    #[test]
    fn remote_kind_dispatches_to_remote_store() {
        let api = api(StubTransport::new().respond(200, "[]").respond(200, "{}"));
        api.create_item(BackendKind::Remote, raw("A")).unwrap();
        assert_eq!(api.remote().transport().requests().len(), 2);
        assert!(api.local().read().unwrap().is_empty());
    }

    #[test]
    fn remote_validation_failure_makes_no_requests() {
        let api = api(StubTransport::new());
        let bad = RawItem::default();
        assert!(api.create_item(BackendKind::Remote, bad).is_err());
        assert!(api.remote().transport().requests().is_empty());
    }

    #[test]
    fn remote_out_of_range_reads_but_never_writes() {
        let api = api(StubTransport::new().respond(200, "[]"));
        assert!(api.delete_item(BackendKind::Remote, "0").is_err());
        let requests = api.remote().transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, crate::store::http::Method::Get);
    }

    #[test]
    fn secret_round_trip_through_local_kv() {
        let api = api(StubTransport::new());
        api.set_secret("new-key").unwrap();
        let stored = secret::read_override(api.local().kv()).unwrap().unwrap();
        assert_eq!(stored.expose(), "new-key");

        api.clear_secret().unwrap();
        assert!(secret::read_override(api.local().kv()).unwrap().is_none());
    }

    #[test]
    fn secret_status_never_reveals_key() {
        let api = api(StubTransport::new());
        let result = api.secret_status();
        assert!(result
            .messages
            .iter()
            .all(|m| !m.content.contains("s3cr3t-value")));
        assert!(result.messages[0].content.contains("local override"));
    }
}
