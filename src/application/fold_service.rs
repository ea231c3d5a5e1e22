// Fold service - Applies configured category folds to a graph
use crate::application::category_repository::CategoryRepository;
use crate::domain::category::GraphCategory;
use crate::domain::graph::Graph;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct FoldService {
    repository: Arc<dyn CategoryRepository>,
}

impl FoldService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Fold a graph using the configured categories. Categories supplied with
    /// the request replace configured ones of the same name.
    pub async fn fold_graph(
        &self,
        graph: Graph,
        overrides: BTreeMap<String, GraphCategory>,
    ) -> anyhow::Result<Graph> {
        let mut categories = self.repository.list_categories().await?;
        categories.extend(overrides);

        let node_count = graph.nodes.len();
        let folded = graph.fold(&categories);

        tracing::info!(
            "Folded graph: {} nodes in, {} nodes out, {} folded node(s)",
            node_count,
            folded.nodes.len(),
            folded.folded_nodes().count()
        );

        Ok(folded)
    }
}
