//! Diagram node identity and static layout.
//!
//! The layout is constant configuration consumed by render surfaces; the
//! sequencer core only ever sees [`NodeId`]s.

use glam::Vec2;

/// Stable identifier for every node the diagram can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// External attacker, far left of the diagram.
    Attacker,
    /// Third-party library supplier, below the web application.
    ThirdParty,
    /// The instrumented web application.
    WebApp,
    /// Firewall / WAF in front of the server tier.
    Firewall,
    /// Application server.
    Server,
    /// Cloud storage tier.
    CloudStorage,
    /// Database, far right of the infrastructure row.
    Database,
    /// Zero-day vulnerability marker, revealed during the exposure step.
    ZeroDay,
    /// SOC analyst, appears in the detection and triage steps.
    Analyst,
    /// Developer receiving the fix issue, used by the closing narrative.
    Developer,
}

impl NodeId {
    /// Whether this node belongs to the compromisable infrastructure row.
    #[must_use]
    pub fn is_infrastructure(self) -> bool {
        INFRASTRUCTURE.contains(&self)
    }
}

/// The five infrastructure nodes marked compromised by the intrusion step.
pub const INFRASTRUCTURE: [NodeId; 5] = [
    NodeId::WebApp,
    NodeId::Firewall,
    NodeId::Server,
    NodeId::CloudStorage,
    NodeId::Database,
];

/// Node sequence the intrusion attack line travels through. Segment `i`
/// runs from `ATTACK_PATH[i]` to `ATTACK_PATH[i + 1]`.
pub const ATTACK_PATH: [NodeId; 6] = [
    NodeId::Attacker,
    NodeId::WebApp,
    NodeId::Firewall,
    NodeId::Server,
    NodeId::CloudStorage,
    NodeId::Database,
];

/// Number of animated segments in the intrusion attack line.
pub const SEGMENT_COUNT: usize = ATTACK_PATH.len() - 1;

/// Static descriptor for one diagram node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDescriptor {
    /// Stable identifier.
    pub id: NodeId,
    /// Display label under the node.
    pub label: &'static str,
    /// Fixed diagram coordinate.
    pub pos: Vec2,
    /// Icon glyph drawn inside the node circle.
    pub glyph: &'static str,
}

/// An always-visible dashed connection of the baseline diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// Connection start node.
    pub from: NodeId,
    /// Connection end node.
    pub to: NodeId,
}

/// Every node the diagram can draw, infrastructure row first.
pub const DIAGRAM_NODES: [NodeDescriptor; 10] = [
    NodeDescriptor {
        id: NodeId::Attacker,
        label: "Attacker",
        pos: Vec2::new(60.0, 120.0),
        glyph: "🕵",
    },
    NodeDescriptor {
        id: NodeId::ThirdParty,
        label: "3rd Party",
        pos: Vec2::new(300.0, 220.0),
        glyph: "🔌",
    },
    NodeDescriptor {
        id: NodeId::WebApp,
        label: "Web Application",
        pos: Vec2::new(300.0, 120.0),
        glyph: "🖥",
    },
    NodeDescriptor {
        id: NodeId::Firewall,
        label: "Firewall/WAF",
        pos: Vec2::new(440.0, 120.0),
        glyph: "🛡",
    },
    NodeDescriptor {
        id: NodeId::Server,
        label: "Server",
        pos: Vec2::new(580.0, 120.0),
        glyph: "🖧",
    },
    NodeDescriptor {
        id: NodeId::CloudStorage,
        label: "Cloud Storage",
        pos: Vec2::new(720.0, 120.0),
        glyph: "☁",
    },
    NodeDescriptor {
        id: NodeId::Database,
        label: "Database",
        pos: Vec2::new(860.0, 120.0),
        glyph: "🗄",
    },
    NodeDescriptor {
        id: NodeId::ZeroDay,
        label: "Zero-Day (CVE)",
        pos: Vec2::new(200.0, 60.0),
        glyph: "⚡",
    },
    NodeDescriptor {
        id: NodeId::Analyst,
        label: "SOC Analyst",
        pos: Vec2::new(600.0, 30.0),
        glyph: "🧑",
    },
    NodeDescriptor {
        id: NodeId::Developer,
        label: "Developer",
        pos: Vec2::new(860.0, 220.0),
        glyph: "👨",
    },
];

/// Offset of the runtime sensor marker from the web application node.
pub const SENSOR_OFFSET: Vec2 = Vec2::new(0.0, -50.0);

/// Anchor point of the runtime sensor marker, above the web application.
/// The alert and response lines originate here.
#[must_use]
pub fn sensor_anchor() -> Vec2 {
    position(NodeId::WebApp) + SENSOR_OFFSET
}

/// Dashed baseline connections drawn at every step.
pub const BASELINE_LINKS: [Connection; 5] = [
    Connection { from: NodeId::WebApp, to: NodeId::Firewall },
    Connection { from: NodeId::Firewall, to: NodeId::Server },
    Connection { from: NodeId::Server, to: NodeId::CloudStorage },
    Connection { from: NodeId::CloudStorage, to: NodeId::Database },
    Connection { from: NodeId::WebApp, to: NodeId::ThirdParty },
];

/// Look up the static descriptor for a node.
#[must_use]
pub fn descriptor(id: NodeId) -> &'static NodeDescriptor {
    // DIAGRAM_NODES covers every NodeId variant; the fallback is never taken
    // but keeps the lookup total.
    DIAGRAM_NODES
        .iter()
        .find(|n| n.id == id)
        .unwrap_or(&DIAGRAM_NODES[0])
}

/// Fixed position of a node in diagram coordinates.
#[must_use]
pub fn position(id: NodeId) -> Vec2 {
    descriptor(id).pos
}
