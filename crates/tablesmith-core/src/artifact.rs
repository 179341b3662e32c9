/// Markup flavors, each persisted with its own extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Markup {
    /// Standalone web page
    Page,
    /// Embeddable user control
    Control,
    /// Server-rendered view template
    View,
}

/// What an artifact contains. Only the writer looks at this, to pick a file
/// extension and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Relational script
    Script,
    /// Source class
    Source,
    Markup(Markup),
    Stylesheet,
    /// Data file
    DataFile,
}

/// One named, generated text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Output name, without the kind's extension
    pub name: String,

    /// Generated text
    pub body: String,

    pub kind: ArtifactKind,

    /// Set when a structural gap in the schema replaced the artifact's
    /// content with an explanatory comment
    pub degraded: bool,
}

impl ArtifactKind {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Script => "sql",
            ArtifactKind::Source => "cs",
            ArtifactKind::Markup(Markup::Page) => "aspx",
            ArtifactKind::Markup(Markup::Control) => "ascx",
            ArtifactKind::Markup(Markup::View) => "cshtml",
            ArtifactKind::Stylesheet => "css",
            ArtifactKind::DataFile => "xml",
        }
    }
}

impl Artifact {
    pub fn new(name: impl Into<String>, kind: ArtifactKind, body: impl Into<String>) -> Artifact {
        Artifact {
            name: name.into(),
            body: body.into(),
            kind,
            degraded: false,
        }
    }

    pub fn script(name: impl Into<String>, body: impl Into<String>) -> Artifact {
        Artifact::new(name, ArtifactKind::Script, body)
    }

    pub fn source(name: impl Into<String>, body: impl Into<String>) -> Artifact {
        Artifact::new(name, ArtifactKind::Source, body)
    }

    /// Marks the artifact as a comment-only stand-in
    pub fn degraded(mut self) -> Artifact {
        self.degraded = true;
        self
    }

    /// `name.extension`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(Artifact::script("usp_Game_SelectAll", "").file_name(), "usp_Game_SelectAll.sql");
        assert_eq!(Artifact::source("GameEdit.aspx", "").file_name(), "GameEdit.aspx.cs");
        assert_eq!(
            Artifact::new("GameEdit", ArtifactKind::Markup(Markup::Control), "").file_name(),
            "GameEdit.ascx"
        );
    }

    #[test]
    fn degraded_flag() {
        let artifact = Artifact::script("usp_Log_Update", "-- skipped");
        assert!(!artifact.degraded);
        assert!(artifact.degraded().degraded);
    }
}
