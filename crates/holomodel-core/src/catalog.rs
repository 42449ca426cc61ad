use std::collections::HashSet;

use crate::error::DatasetError;
use crate::model::{Domain, DomainIcon, GraphData, Link, Node, NodeId, NodeKind};

fn node(id: &str, name: &str, kind: &str, val: f32, start_time: i32, description: &str) -> Node {
    Node {
        id: NodeId::new(id),
        name: name.to_string(),
        kind: NodeKind::parse(kind),
        description: description.to_string(),
        val,
        start_time,
    }
}

fn links(pairs: &[(&str, &str)]) -> Vec<Link> {
    pairs.iter().map(|(s, t)| Link::new(*s, *t)).collect()
}

fn software() -> GraphData {
    GraphData {
        nodes: vec![
            node("app", "Application", "Entrypoint", 10.0, 0, "The main application entry point."),
            node("moduleA", "Auth Module", "Module", 8.0, 10, "Handles user authentication and authorization."),
            node("moduleB", "API Module", "Module", 8.0, 10, "Provides the core API endpoints."),
            node("classA", "User Class", "Class", 5.0, 20, "Represents a user entity."),
            node("classB", "Product Class", "Class", 5.0, 25, "Represents a product entity."),
            node("funcA", "login()", "Function", 3.0, 30, "Function to log a user in."),
            node("funcB", "getProduct()", "Function", 3.0, 35, "Fetches product details."),
            node("db", "Database", "Persistence", 7.0, 5, "The primary data store."),
            node("iface", "Repository Interface", "Interface", 4.0, 15, "Abstracts data access logic."),
            node("var", "API_KEY", "Constant", 2.0, 40, "Constant for external API key."),
        ],
        links: links(&[
            ("app", "moduleA"),
            ("app", "moduleB"),
            ("moduleA", "classA"),
            ("moduleB", "classB"),
            ("classA", "funcA"),
            ("classB", "funcB"),
            ("moduleA", "iface"),
            ("moduleB", "iface"),
            ("iface", "db"),
            ("funcB", "var"),
        ]),
    }
}

fn human_resources() -> GraphData {
    GraphData {
        nodes: vec![
            node("employer", "Tech Corp", "Employer", 10.0, 0, "The hiring company."),
            node("recruit", "Recruiting Dept", "Department", 8.0, 10, "Manages the hiring process."),
            node("projA", "Project Phoenix", "Project", 7.0, 5, "A major ongoing project."),
            node("emp1", "Alice", "Employee", 5.0, 50, "A senior software engineer."),
            node("emp2", "Bob", "Employee", 5.0, 60, "A project manager."),
            node("cand1", "Charlie", "Candidate", 4.0, 20, "A candidate for an engineering role."),
            node("resume1", "Charlie's Resume", "Document", 3.0, 25, "Details Charlie's qualifications."),
            node("interview1", "Technical Interview", "Meeting", 4.0, 35, "Technical screening for Charlie."),
            node("offer", "Job Offer", "Document", 3.0, 45, "Official job offer sent to Charlie."),
        ],
        links: links(&[
            ("employer", "recruit"),
            ("employer", "projA"),
            ("recruit", "cand1"),
            ("cand1", "resume1"),
            ("recruit", "interview1"),
            ("cand1", "interview1"),
            ("interview1", "offer"),
            ("offer", "emp1"),
            ("projA", "emp1"),
            ("projA", "emp2"),
        ]),
    }
}

fn product_lifecycle() -> GraphData {
    GraphData {
        nodes: vec![
            node("product", "Drone Model X", "Product", 10.0, 0, "A new generation commercial drone."),
            node("req", "Requirements", "Collection", 8.0, 10, "The set of all product requirements."),
            node("req1", "Flight Time > 30min", "Requirement", 4.0, 15, "Must have a flight time exceeding 30 minutes."),
            node("req2", "4K Camera", "Requirement", 4.0, 20, "Must include a 4K resolution camera."),
            node("design", "Mechanical Design", "Model", 7.0, 25, "3D CAD models of the drone body."),
            node("bom", "Bill of Materials", "Document", 6.0, 40, "List of all parts and components."),
            node("test", "Wind Tunnel Test", "Test", 5.0, 55, "Aerodynamic stability testing."),
            node("release", "Version 1.0 Release", "Release", 8.0, 80, "The first official product release."),
            node("mfg", "Manufacturing", "Process", 7.0, 65, "The manufacturing and assembly process."),
        ],
        links: links(&[
            ("product", "req"),
            ("req", "req1"),
            ("req", "req2"),
            ("req1", "design"),
            ("req2", "design"),
            ("design", "bom"),
            ("design", "test"),
            ("bom", "mfg"),
            ("mfg", "release"),
            ("product", "release"),
        ]),
    }
}

pub fn builtin_domains() -> Vec<Domain> {
    vec![
        Domain {
            id: "software".to_string(),
            name: "Software Engineering".to_string(),
            icon: DomainIcon::Code,
            data: software(),
        },
        Domain {
            id: "hr".to_string(),
            name: "Human Resources".to_string(),
            icon: DomainIcon::UserGroup,
            data: human_resources(),
        },
        Domain {
            id: "plm".to_string(),
            name: "Product Lifecycle".to_string(),
            icon: DomainIcon::Cube,
            data: product_lifecycle(),
        },
    ]
}

/// Parses a JSON array of domains and validates each one.
pub fn parse_domains_json(raw: &str) -> Result<Vec<Domain>, DatasetError> {
    let domains: Vec<Domain> = serde_json::from_str(raw)?;
    for d in &domains {
        d.validate()?;
    }
    Ok(domains)
}

/// Appends `extra` to `base`, rejecting the first domain whose id is taken.
/// `base` is left untouched on error.
pub fn merge_domains(base: &mut Vec<Domain>, extra: Vec<Domain>) -> Result<usize, DatasetError> {
    let mut seen: HashSet<String> = base.iter().map(|d| d.id.clone()).collect();
    for d in &extra {
        if !seen.insert(d.id.clone()) {
            return Err(DatasetError::DuplicateDomain(d.id.clone()));
        }
    }
    let added = extra.len();
    base.extend(extra);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_domains_are_valid() {
        let domains = builtin_domains();
        assert_eq!(domains.len(), 3);
        for d in &domains {
            d.validate().expect("builtin dataset");
            assert_eq!(d.data.links.len(), 10);
        }
        assert_eq!(domains[0].name, "Software Engineering");
        assert_eq!(domains[0].data.nodes.len(), 10);
        assert_eq!(domains[1].data.nodes.len(), 9);
        assert_eq!(domains[2].data.nodes.len(), 9);
    }

    #[test]
    fn parse_domains_json_validates_links() {
        let raw = r#"[{
            "id": "ops",
            "name": "Operations",
            "icon": "cube",
            "data": {
                "nodes": [
                    {"id": "a", "name": "A", "type": "Service", "val": 4, "startTime": 0},
                    {"id": "b", "name": "B", "type": "Module", "val": 2, "startTime": 50}
                ],
                "links": [{"source": "a", "target": "b"}]
            }
        }]"#;
        let domains = parse_domains_json(raw).expect("valid json");
        assert_eq!(domains[0].icon, DomainIcon::Cube);
        assert_eq!(domains[0].data.nodes[1].kind, NodeKind::Module);
        assert!(domains[0].data.nodes[0].description.is_empty());

        let broken = raw.replace(r#""target": "b""#, r#""target": "zz""#);
        match parse_domains_json(&broken) {
            Err(DatasetError::InvalidDomain { domain, .. }) => assert_eq!(domain, "ops"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            parse_domains_json("{not json"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn merge_rejects_taken_ids() {
        let mut base = builtin_domains();
        let mut dup = builtin_domains();
        dup.truncate(1);
        assert!(matches!(
            merge_domains(&mut base, dup),
            Err(DatasetError::DuplicateDomain(id)) if id == "software"
        ));
        assert_eq!(base.len(), 3);

        let mut extra = builtin_domains();
        extra.truncate(1);
        extra[0].id = "software-copy".to_string();
        assert_eq!(merge_domains(&mut base, extra).expect("merge"), 1);
        assert_eq!(base.len(), 4);
    }
}
