//! The project a command operates on: config, store and storage.

use pagesmith_editor::{Dispatcher, EditorError, FilePersistence, Gateway, Store};
use pagesmith_model::Document;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;

pub struct Project {
    pub dir: PathBuf,
    pub config: Config,
    pub store: Store,
    /// Whether a saved document was found on open
    pub restored: bool,
    gateway: Gateway<FilePersistence>,
}

impl Project {
    /// Open the project in `dir`, falling back to a blank document
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        let config = Config::load(dir)?;
        let gateway = Gateway::new(FilePersistence::new(config.get_storage_dir(dir)));

        let mut store = Store::with_dispatcher(Document::new(), Dispatcher::with_default_rules())
            .with_max_levels(config.history_limit);
        let restored = gateway.restore(&mut store);
        // Loading the saved project is not an edit
        store.clear_history();

        debug!(
            "Opened project in {} (restored: {})",
            dir.display(),
            restored
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            config,
            store,
            restored,
            gateway,
        })
    }

    pub fn save(&mut self) -> Result<(), EditorError> {
        self.gateway.save(&self.store)?;
        Ok(())
    }

    pub fn gateway(&self) -> &Gateway<FilePersistence> {
        &self.gateway
    }

    /// Import `text` through the gateway into this project's store
    pub fn import(&mut self, text: &str) -> Result<(), EditorError> {
        self.gateway.import(&mut self.store, text)?;
        Ok(())
    }

    pub fn project_file(&self) -> PathBuf {
        self.gateway.port().path_for(self.gateway.key())
    }
}
