// Graph domain model and category folding
use super::category::GraphCategory;
use super::category_fold::CategoryFold;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folded_nodes: Vec<FoldedNode>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            id: id.into(),
            category: category.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn is_folded(&self) -> bool {
        !self.folded_nodes.is_empty()
    }
}

/// A node that was collapsed into a folded node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldedNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl GraphEdge {
    pub fn new(from_id: &str, to_id: &str) -> Self {
        Self {
            id: format!("{}_{}", from_id, to_id),
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            category: None,
            title: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// Incoming sources and outgoing targets of a node. Nodes of one category
/// sharing a neighbourhood are candidates for folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Neighbourhood {
    incoming: BTreeSet<String>,
    outgoing: BTreeSet<String>,
}

struct FoldGroup {
    fold_id: String,
    neighbourhood: Neighbourhood,
    members: Vec<String>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn folded_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|node| node.is_folded())
    }

    /// Collapse nodes of every folding category. Categories are visited in
    /// map order, so later folds see the edges rewritten by earlier ones.
    pub fn fold(self, categories: &BTreeMap<String, GraphCategory>) -> Graph {
        let mut graph = self;
        for (name, category) in categories {
            let (Some(threshold), Some(fold)) =
                (category.fold_threshold(), category.fold.as_ref())
            else {
                continue;
            };
            graph = graph.fold_category(name, fold, threshold);
        }
        graph
    }

    fn fold_category(self, category: &str, fold: &CategoryFold, threshold: i64) -> Graph {
        let groups = self.fold_groups(category, threshold);
        if groups.is_empty() {
            return self;
        }

        let replacements: HashMap<&str, &str> = groups
            .iter()
            .flat_map(|group| {
                group
                    .members
                    .iter()
                    .map(|member| (member.as_str(), group.fold_id.as_str()))
            })
            .collect();

        let Graph { nodes, edges } = &self;

        let titles: HashMap<&str, Option<&String>> = nodes
            .iter()
            .map(|node| (node.id.as_str(), node.title.as_ref()))
            .collect();

        let mut folded_nodes = Vec::with_capacity(groups.len());
        let mut new_edges = Vec::new();
        let mut seen_edges = HashSet::new();

        for group in &groups {
            folded_nodes.push(GraphNode {
                id: group.fold_id.clone(),
                title: fold.title.clone(),
                category: Some(category.to_string()),
                icon: fold.icon.clone(),
                folded_nodes: group
                    .members
                    .iter()
                    .map(|member| FoldedNode {
                        id: member.clone(),
                        title: titles.get(member.as_str()).copied().flatten().cloned(),
                    })
                    .collect(),
                ..GraphNode::default()
            });

            let resolve = |id: &str| -> String {
                replacements.get(id).copied().unwrap_or(id).to_string()
            };

            let incoming = group
                .neighbourhood
                .incoming
                .iter()
                .map(|source| (resolve(source.as_str()), group.fold_id.clone()));
            let outgoing = group
                .neighbourhood
                .outgoing
                .iter()
                .map(|target| (group.fold_id.clone(), resolve(target.as_str())));

            for (from_id, to_id) in incoming.chain(outgoing) {
                if from_id == to_id {
                    continue;
                }
                let edge = GraphEdge::new(&from_id, &to_id);
                if seen_edges.insert(edge.id.clone()) {
                    new_edges.push(edge);
                }
            }
        }

        let mut result_nodes: Vec<GraphNode> = nodes
            .iter()
            .filter(|node| !replacements.contains_key(node.id.as_str()))
            .cloned()
            .collect();
        result_nodes.extend(folded_nodes);

        let mut result_edges: Vec<GraphEdge> = edges
            .iter()
            .filter(|edge| {
                !replacements.contains_key(edge.from_id.as_str())
                    && !replacements.contains_key(edge.to_id.as_str())
            })
            .cloned()
            .collect();
        result_edges.extend(new_edges);

        tracing::debug!(
            "Folded {} nodes of category {} into {} group(s)",
            replacements.len(),
            category,
            groups.len()
        );

        Graph::new(result_nodes, result_edges)
    }

    fn fold_groups(&self, category: &str, threshold: i64) -> Vec<FoldGroup> {
        let neighbourhoods = self.neighbourhoods();

        let mut candidates: Vec<(Neighbourhood, Vec<String>)> = Vec::new();
        for node in self
            .nodes
            .iter()
            .filter(|node| node.category.as_deref() == Some(category))
        {
            let neighbourhood = neighbourhoods
                .get(node.id.as_str())
                .cloned()
                .unwrap_or_default();
            match candidates.iter_mut().find(|(key, _)| *key == neighbourhood) {
                Some((_, members)) => members.push(node.id.clone()),
                None => candidates.push((neighbourhood, vec![node.id.clone()])),
            }
        }

        candidates
            .into_iter()
            .filter(|(_, members)| members.len() as i64 >= threshold)
            .enumerate()
            .map(|(index, (neighbourhood, members))| FoldGroup {
                fold_id: format!("fold-{}-{}", category, index + 1),
                neighbourhood,
                members,
            })
            .collect()
    }

    fn neighbourhoods(&self) -> HashMap<&str, Neighbourhood> {
        let mut neighbourhoods: HashMap<&str, Neighbourhood> = HashMap::new();
        for edge in &self.edges {
            neighbourhoods
                .entry(edge.to_id.as_str())
                .or_default()
                .incoming
                .insert(edge.from_id.clone());
            neighbourhoods
                .entry(edge.from_id.as_str())
                .or_default()
                .outgoing
                .insert(edge.to_id.clone());
        }
        neighbourhoods
    }
}
