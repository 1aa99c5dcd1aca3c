//! End-to-end rendering of class specs.
//!
//! Each test builds a spec and compares the full rendered document.

use rbgen_ruby::{ClassRenderer, ClassSpec, ClassSpecBuilder, Error, Generator, RubyParser, Settings};

fn plain() -> Settings {
    Settings::default().with_frozen_string_literal(false)
}

/// Render without the default magic comment.
fn render(builder: ClassSpecBuilder) -> String {
    builder
        .build()
        .expect("spec should be valid")
        .render_with(&plain(), RubyParser)
        .expect("output should be valid Ruby")
}

/// Render with default settings.
fn render_default(builder: ClassSpecBuilder) -> String {
    builder
        .build()
        .expect("spec should be valid")
        .render()
        .expect("output should be valid Ruby")
}

mod empty_class {
    use super::*;

    #[test]
    fn test_top_level() {
        assert_eq!(render(ClassSpec::builder("Greeter")), "class Greeter\nend\n");
        assert_eq!(
            render(ClassSpec::builder("Greeter").parent("BaseService")),
            "class Greeter < BaseService\nend\n"
        );
    }

    #[test]
    fn test_single_module() {
        assert_eq!(
            render(ClassSpec::builder("Greeter").scope("Services")),
            "\
module Services
  class Greeter
  end
end
"
        );
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .parent("BaseService")
                    .scope("Services")
            ),
            "\
module Services
  class Greeter < BaseService
  end
end
"
        );
    }

    #[test]
    fn test_two_modules() {
        assert_eq!(
            render(ClassSpec::builder("Greeter").scopes(["Admin", "Services"])),
            "\
module Admin
  module Services
    class Greeter
    end
  end
end
"
        );
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .parent("BaseService")
                    .scopes(["Admin", "Services"])
            ),
            "\
module Admin
  module Services
    class Greeter < BaseService
    end
  end
end
"
        );
    }

    #[test]
    fn test_three_modules() {
        assert_eq!(
            render(ClassSpec::builder("Greeter").scopes(["Internal", "Admin", "Services"])),
            "\
module Internal
  module Admin
    module Services
      class Greeter
      end
    end
  end
end
"
        );
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .parent("BaseService")
                    .scopes(["Internal", "Admin", "Services"])
            ),
            "\
module Internal
  module Admin
    module Services
      class Greeter < BaseService
      end
    end
  end
end
"
        );
    }

    #[test]
    fn test_frozen_string_literal_by_default() {
        assert_eq!(
            render_default(ClassSpec::builder("Greeter")),
            "# frozen_string_literal: true\n\nclass Greeter\nend\n"
        );
        assert_eq!(
            render_default(ClassSpec::builder("Greeter").parent("BaseService")),
            "# frozen_string_literal: true\n\nclass Greeter < BaseService\nend\n"
        );
    }
}

mod methods {
    use super::*;

    #[test]
    fn test_method_without_params() {
        assert_eq!(
            render(ClassSpec::builder("Greeter").method_without_params("call")),
            "\
class Greeter
  def call
  end
end
"
        );
    }

    #[test]
    fn test_method_with_one_param() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .parent("BaseService")
                    .method("call", ["args"])
            ),
            "\
class Greeter < BaseService
  def call(args)
  end
end
"
        );
    }

    #[test]
    fn test_positional_params() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .scope("Services")
                    .method("call", ["request", "response"])
            ),
            "\
module Services
  class Greeter
    def call(request, response)
    end
  end
end
"
        );
    }

    #[test]
    fn test_keyword_params() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .parent("BaseService")
                    .scope("Services")
                    .method("call", ["request:", "response:"])
            ),
            "\
module Services
  class Greeter < BaseService
    def call(request:, response:)
    end
  end
end
"
        );
    }

    #[test]
    fn test_mixed_params_pass_through_verbatim() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .scopes(["Admin", "Services"])
                    .method("call", ["env", "request:", "response:", "context: nil"])
            ),
            "\
module Admin
  module Services
    class Greeter
      def call(env, request:, response:, context: nil)
      end
    end
  end
end
"
        );
    }

    #[test]
    fn test_explicit_initialize_without_fields() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .parent("BaseService")
                    .scopes(["Admin", "Services"])
                    .method("initialize", ["context"])
                    .method("call", ["args"])
            ),
            "\
module Admin
  module Services
    class Greeter < BaseService
      def initialize(context)
      end

      def call(args)
      end
    end
  end
end
"
        );
    }
}

mod fields {
    use super::*;

    #[test]
    fn test_constructor_method_and_readers() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .scopes(["Internal", "Admin", "Services"])
                    .fields(["@name", "@birthdate"])
                    .method("call", ["env"])
            ),
            "\
module Internal
  module Admin
    module Services
      class Greeter
        def initialize(name:, birthdate:)
          @name = name
          @birthdate = birthdate
        end

        def call(env)
        end

        private

        attr_reader :name, :birthdate
      end
    end
  end
end
"
        );
    }

    #[test]
    fn test_field_without_sigil() {
        let err = ClassSpec::builder("Greeter").field("name").build().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidFieldName {
                name: "name".to_string()
            }
        );
    }

    #[test]
    fn test_initialize_next_to_fields() {
        let err = ClassSpec::builder("Greeter")
            .field("@name")
            .method_without_params("initialize")
            .build()
            .unwrap_err();
        assert_eq!(err, Error::ConflictingConstructor);
    }

    #[test]
    fn test_field_must_name_an_identifier() {
        for name in ["@", "@class", "@first-name"] {
            let err = ClassSpec::builder("Greeter").field(name).build().unwrap_err();
            assert!(
                matches!(err, Error::InvalidIdentifier { .. }),
                "{name} accepted: {err:?}"
            );
        }
    }

    #[test]
    fn test_readers_round_trip_to_field_names() {
        let spec = ClassSpec::builder("Greeter")
            .fields(["@name", "@birthdate", "@email"])
            .build()
            .unwrap();
        let code = spec.render().unwrap();

        let readers = code
            .lines()
            .find_map(|line| line.trim().strip_prefix("attr_reader "))
            .expect("attr_reader line");
        let names: Vec<&str> = readers
            .split(", ")
            .map(|symbol| symbol.trim_start_matches(':'))
            .collect();

        assert_eq!(names, spec.field_names().collect::<Vec<_>>());
    }
}

mod requires {
    use super::*;

    #[test]
    fn test_requires_before_modules() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .parent("BaseService")
                    .scopes(["Internal", "Admin", "Services"])
                    .require("roobi/fake")
            ),
            "\
require \"roobi/fake\"

module Internal
  module Admin
    module Services
      class Greeter < BaseService
      end
    end
  end
end
"
        );
    }

    #[test]
    fn test_requires_and_relative_requires_after_magic_comment() {
        assert_eq!(
            render_default(
                ClassSpec::builder("Greeter")
                    .require("roobi/fake")
                    .require_relative("secret/parser")
            ),
            "\
# frozen_string_literal: true

require \"roobi/fake\"
require_relative \"secret/parser\"

class Greeter
end
"
        );
    }
}

mod includes {
    use super::*;

    fn greeter() -> ClassSpecBuilder {
        ClassSpec::builder("Greeter")
            .include("Enumerable")
            .include(r#"Import["external.api"]"#)
    }

    #[test]
    fn test_includes_only() {
        assert_eq!(
            render(greeter()),
            "\
class Greeter
  include Enumerable
  include Import[\"external.api\"]
end
"
        );
    }

    #[test]
    fn test_includes_and_fields() {
        assert_eq!(
            render(greeter().field("@name")),
            "\
class Greeter
  include Enumerable
  include Import[\"external.api\"]

  def initialize(name:)
    @name = name
  end

  private

  attr_reader :name
end
"
        );
    }

    #[test]
    fn test_includes_and_method() {
        assert_eq!(
            render(greeter().method("call", ["name"])),
            "\
class Greeter
  include Enumerable
  include Import[\"external.api\"]

  def call(name)
  end
end
"
        );
    }
}

mod naming {
    use super::*;

    #[test]
    fn test_qualified_names_pass_through() {
        assert_eq!(
            render(
                ClassSpec::builder("Services::Greeter")
                    .parent("Internal::BaseService")
                    .scope("Internal::Admin")
            ),
            "\
module Internal::Admin
  class Services::Greeter < Internal::BaseService
  end
end
"
        );
    }

    #[test]
    fn test_unparseable_name() {
        let spec = ClassSpec::builder("%%Greeter").build().unwrap();
        let err = spec.render().unwrap_err();

        assert!(matches!(err, Error::UnparseableOutput { .. }));
        assert_eq!(
            err.source_code(),
            Some("# frozen_string_literal: true\n\nclass %%Greeter\nend\n")
        );
    }

    #[test]
    fn test_unparseable_parameter() {
        let spec = ClassSpec::builder("Greeter")
            .method("call", [":"])
            .build()
            .unwrap();
        let err = spec.render_with(&plain(), RubyParser).unwrap_err();

        assert!(matches!(err, Error::UnparseableOutput { .. }));
        assert_eq!(
            err.source_code(),
            Some("class Greeter\n  def call(:)\n  end\nend\n")
        );
    }
}

mod magic_comments {
    use super::*;

    #[test]
    fn test_custom_comment() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .scope("Internal")
                    .directive("value", true)
            ),
            "\
# value: true

module Internal
  class Greeter
  end
end
"
        );
    }

    #[test]
    fn test_sorted_with_default() {
        assert_eq!(
            render_default(
                ClassSpec::builder("Greeter")
                    .scope("Internal")
                    .directive("value", true)
                    .directive("abc", 123)
            ),
            "\
# abc: 123
# frozen_string_literal: true
# value: true

module Internal
  class Greeter
  end
end
"
        );
    }
}

mod top_contents {
    use super::*;

    #[test]
    fn test_only_top_contents() {
        assert_eq!(
            render(ClassSpec::builder("Foo").top_content("# code goes here")),
            "\
class Foo
  # code goes here
end
"
        );
    }

    #[test]
    fn test_expression_blocks() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .top_content("CACHE = begin\n  load\nend")
                    .top_content("QUERY = <<~SQL\n  select 1\nSQL")
            ),
            "\
class Greeter
  CACHE = begin
    load
  end
  QUERY = <<~SQL
    select 1
  SQL
end
"
        );
    }

    #[test]
    fn test_broken_content_is_rejected() {
        let spec = ClassSpec::builder("Greeter")
            .top_content("attr_reader :")
            .build()
            .unwrap();
        assert!(matches!(
            spec.render_with(&plain(), RubyParser),
            Err(Error::UnparseableOutput { .. })
        ));
    }

    #[test]
    fn test_between_includes_and_constructor() {
        assert_eq!(
            render(
                ClassSpec::builder("Greeter")
                    .include("Validatable")
                    .field("@name")
                    .top_content("before_call :validate")
            ),
            "\
class Greeter
  include Validatable

  before_call :validate

  def initialize(name:)
    @name = name
  end

  private

  attr_reader :name
end
"
        );
    }
}

#[test]
fn test_render_is_idempotent() {
    let spec = ClassSpec::builder("Greeter")
        .parent("BaseService")
        .scopes(["Admin", "Services"])
        .include("Validatable")
        .require("json")
        .field("@name")
        .method("call", ["request"])
        .directive("abc", 123)
        .build()
        .unwrap();

    assert_eq!(spec.render().unwrap(), spec.render().unwrap());
}

#[test]
fn test_output_shape() {
    let code = render_default(
        ClassSpec::builder("Greeter")
            .scopes(["Admin", "Services"])
            .include("Validatable")
            .field("@name")
            .method("call", ["request"])
            .method_without_params("reset"),
    );

    assert!(code.ends_with("end\n"));
    assert!(!code.ends_with("\n\n"));
    assert!(!code.contains("\n\n\n"));
    for line in code.lines() {
        assert_eq!(line.trim_end(), line, "trailing whitespace in {line:?}");
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent % 2, 0, "odd indentation in {line:?}");
    }
}

#[test]
fn test_specs_and_renderers_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ClassSpec>();
    assert_send_sync::<Settings>();
    assert_send_sync::<RubyParser>();
    assert_send_sync::<ClassRenderer>();
    assert_send_sync::<Generator<'static>>();
}
