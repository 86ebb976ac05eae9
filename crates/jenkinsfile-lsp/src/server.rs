//! Main LSP server implementation.

use dashmap::DashMap;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::document::Document;
use crate::hover::provide_hover;

/// The Jenkinsfile Language Server.
pub struct JenkinsfileLanguageServer {
    /// LSP client for sending notifications.
    client: Client,
    /// Open documents indexed by URI.
    documents: DashMap<Url, Document>,
}

impl JenkinsfileLanguageServer {
    /// Create a new language server instance.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DashMap::new(),
        }
    }

    /// Text of an open document, if any.
    pub fn document_text(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|doc| doc.content())
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for JenkinsfileLanguageServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("Jenkinsfile Language Server initialized");
        self.client
            .log_message(MessageType::INFO, "Jenkinsfile Language Server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("Jenkinsfile Language Server shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!("Document opened: {}", uri);

        let doc = Document::new(&params.text_document.text, params.text_document.version);
        self.documents.insert(uri, doc);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!("Document changed: {}", uri);

        let Some(mut doc) = self.documents.get_mut(&uri) else {
            tracing::warn!("Change for unopened document: {}", uri);
            return;
        };
        // Later edits in the batch are relative to the text the rejected one
        // would have produced, so they are dropped with it.
        for (idx, change) in params.content_changes.iter().enumerate() {
            if let Err(err) = doc.apply_change(change, params.text_document.version) {
                let skipped = params.content_changes.len() - idx - 1;
                tracing::warn!("Dropping edit to {} ({} more skipped): {}", uri, skipped, err);
                break;
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        tracing::debug!("Document closed: {}", params.text_document.uri);
        self.documents.remove(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        match self.documents.get(uri) {
            Some(doc) => Ok(provide_hover(&doc, position)),
            None => {
                tracing::debug!("Hover on unknown document: {}", uri);
                Ok(None)
            }
        }
    }
}
