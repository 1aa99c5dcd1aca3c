//! Declarative description of a Ruby class.

use indexmap::IndexMap;
use rbgen_core::{constant_path_to_file_path, validate_identifier};
use rbgen_manifest::ClassManifest;

use crate::{Error, Result};

/// Instance variable sigil.
pub const FIELD_SIGIL: char = '@';

/// Name of the constructor synthesized from fields.
pub const CONSTRUCTOR: &str = "initialize";

/// An immutable, validated description of one class.
///
/// Build one with [`ClassSpec::builder`] or from a parsed manifest via
/// `ClassSpec::try_from(&manifest.class)`. Construction checks that every
/// field is `@` followed by a plain, non-reserved identifier and that no
/// `initialize` method is declared next to fields. Class, module and
/// method names are checked when the output is validated.
///
/// ```
/// use rbgen_ruby::ClassSpec;
///
/// let spec = ClassSpec::builder("Greeter")
///     .parent("BaseService")
///     .scopes(["Admin", "Services"])
///     .field("@name")
///     .method("call", ["request"])
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.field_names().collect::<Vec<_>>(), ["name"]);
/// assert_eq!(spec.file_path(), "admin/services/greeter.rb");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    name: String,
    parent: Option<String>,
    scopes: Vec<String>,
    includes: Vec<String>,
    requires: Vec<String>,
    relative_requires: Vec<String>,
    fields: Vec<String>,
    methods: IndexMap<String, Option<Vec<String>>>,
    top_contents: Vec<String>,
    directives: IndexMap<String, String>,
}

impl ClassSpec {
    /// Start describing a class called `name`.
    pub fn builder(name: impl Into<String>) -> ClassSpecBuilder {
        ClassSpecBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Enclosing modules, outermost first.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    pub fn relative_requires(&self) -> &[String] {
        &self.relative_requires
    }

    /// Declared instance variables, sigil included.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Declared instance variables without their sigil, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .map(|field| field.strip_prefix(FIELD_SIGIL).unwrap_or(field))
    }

    /// Methods in declaration order. `None` and an empty list both mean
    /// no parameters.
    pub fn methods(&self) -> &IndexMap<String, Option<Vec<String>>> {
        &self.methods
    }

    pub fn top_contents(&self) -> &[String] {
        &self.top_contents
    }

    /// Caller-supplied magic comments, in declaration order.
    pub fn directives(&self) -> &IndexMap<String, String> {
        &self.directives
    }

    /// Conventional path of the file defining this class, relative to a
    /// load path root (e.g. `admin/services/greeter.rb`).
    pub fn file_path(&self) -> String {
        let segments: Vec<&str> = self
            .scopes
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect();
        constant_path_to_file_path(&segments)
    }

    fn validate(self) -> Result<Self> {
        for field in &self.fields {
            let Some(name) = field.strip_prefix(FIELD_SIGIL) else {
                return Err(Error::InvalidFieldName {
                    name: field.clone(),
                });
            };

            if let Some(reason) = validate_identifier(name) {
                return Err(Error::InvalidIdentifier {
                    name: field.clone(),
                    reason: reason.to_string(),
                });
            }
        }

        if !self.fields.is_empty() && self.methods.contains_key(CONSTRUCTOR) {
            return Err(Error::ConflictingConstructor);
        }

        Ok(self)
    }
}

impl TryFrom<&ClassManifest> for ClassSpec {
    type Error = Error;

    fn try_from(class: &ClassManifest) -> Result<Self> {
        ClassSpec {
            name: class.name.clone(),
            parent: class.parent.clone(),
            scopes: class.modules.clone(),
            includes: class.includes.clone(),
            requires: class.requires.clone(),
            relative_requires: class.relative_requires.clone(),
            fields: class.fields.clone(),
            methods: class.methods.clone(),
            top_contents: class.top_contents.clone(),
            directives: class
                .directives
                .iter()
                .map(|(key, value)| (key.clone(), value.to_string()))
                .collect(),
        }
        .validate()
    }
}

/// Fluent builder for [`ClassSpec`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ClassSpecBuilder {
    spec: ClassSpec,
}

impl ClassSpecBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: ClassSpec {
                name: name.into(),
                parent: None,
                scopes: Vec::new(),
                includes: Vec::new(),
                requires: Vec::new(),
                relative_requires: Vec::new(),
                fields: Vec::new(),
                methods: IndexMap::new(),
                top_contents: Vec::new(),
                directives: IndexMap::new(),
            },
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.spec.parent = Some(parent.into());
        self
    }

    /// Add one enclosing module; call outermost first.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.spec.scopes.push(scope.into());
        self
    }

    pub fn scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.spec.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    pub fn include(mut self, module: impl Into<String>) -> Self {
        self.spec.includes.push(module.into());
        self
    }

    pub fn require(mut self, path: impl Into<String>) -> Self {
        self.spec.requires.push(path.into());
        self
    }

    pub fn require_relative(mut self, path: impl Into<String>) -> Self {
        self.spec.relative_requires.push(path.into());
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.spec.fields.push(field.into());
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.spec.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Declare a method. Redeclaring a name replaces its parameters but
    /// keeps its original position.
    pub fn method(
        mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let params = params.into_iter().map(Into::into).collect();
        self.spec.methods.insert(name.into(), Some(params));
        self
    }

    /// Declare a method that takes no parameters.
    pub fn method_without_params(mut self, name: impl Into<String>) -> Self {
        self.spec.methods.insert(name.into(), None);
        self
    }

    pub fn top_content(mut self, line: impl Into<String>) -> Self {
        self.spec.top_contents.push(line.into());
        self
    }

    /// Add a `# key: value` magic comment. Later values for the same key win.
    pub fn directive(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.spec.directives.insert(key.into(), value.to_string());
        self
    }

    /// Validate and produce the spec.
    pub fn build(self) -> Result<ClassSpec> {
        self.spec.validate()
    }
}
