//! Scene diagram data model
//!
//! One [`SceneRecord`] per scene file, holding member declarations and
//! composition edges in the order they were discovered.

/// Whether a member is a field or a method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
}

/// A public member declared by a scene's script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDeclaration {
    pub kind: MemberKind,
    pub name: String,
}

impl MemberDeclaration {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Field,
            name: name.into(),
        }
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Method,
            name: name.into(),
        }
    }
}

/// Scene `container` embeds scene `embedded`
///
/// Drawn as an inheritance arrow (`<|--`) for compactness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionEdge {
    pub container: String,
    pub embedded: String,
}

impl CompositionEdge {
    pub fn new(container: impl Into<String>, embedded: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            embedded: embedded.into(),
        }
    }
}

/// A single diagram statement belonging to a scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Member(MemberDeclaration),
    Composition(CompositionEdge),
}

/// A scene in the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRecord {
    pub name: String,
    statements: Vec<Statement>,
}

impl SceneRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statements: Vec::new(),
        }
    }

    pub fn add_member(&mut self, member: MemberDeclaration) {
        self.statements.push(Statement::Member(member));
    }

    /// Record that this scene embeds the scene named `embedded`
    pub fn add_composition(&mut self, embedded: impl Into<String>) {
        let edge = CompositionEdge::new(self.name.clone(), embedded);
        self.statements.push(Statement::Composition(edge));
    }

    /// All statements in discovery order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn members(&self) -> impl Iterator<Item = &MemberDeclaration> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Member(member) => Some(member),
            Statement::Composition(_) => None,
        })
    }

    pub fn compositions(&self) -> impl Iterator<Item = &CompositionEdge> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Composition(edge) => Some(edge),
            Statement::Member(_) => None,
        })
    }

    pub fn member_count(&self) -> usize {
        self.members().count()
    }

    pub fn composition_count(&self) -> usize {
        self.compositions().count()
    }
}
