//! Snapshot tests for assembled PHP source.
//!
//! These verify whole generated declarations rather than single fragments;
//! run `cargo insta review` to update snapshots after intentional changes.

use phpgen::{Argument, ClassBuilder, FunctionBuilder, Generator, IfBuilder, TraitBuilder, Value};

#[test]
fn test_full_class_assembly() -> phpgen::Result<()> {
    let code = ClassBuilder::new()
        .def_namespace("app\\models")
        .def_description(&["Generated by phpgen.", "Do not edit by hand."])
        .def_name("User")
        .def_use("app\\db\\Connection", None)
        .def_use("app\\db\\QueryBuilder", Some("Query"))
        .def_comment()
        .def_line("Application user record.")
        .end()?
        .def_trait("app\\traits\\Timestamps")
        .def_typed_constant(
            "STATE_ACTIVE",
            Some(Value::from("active")),
            "string",
            "Active account state",
        )?
        .end()?
        .def_typed_property("name", "string", None, Some("Display name"))?
        .end()?
        .def_protected_property(
            "attributes",
            "array",
            Some(Value::entries([(Value::from("role"), Value::from("user"))])),
            None,
        )?
        .end()?
        .def_method("save")
        .def_argument(Argument::typed("connection", "Connection"))
        .def_comment()
        .def_line("Persist the record.")
        .def_return("bool", None)
        .end()
        .def_line("$saved = $connection->persist($this);")
        .def_if()
        .def_condition("$saved === false")
        .def_line("return false;")
        .end()?
        .def_else()
        .def_line("return true;")
        .end()?
        .end()?
        .end()?
        .render()?;

    insta::assert_snapshot!(code, @r#"
    /**
     * Generated by phpgen.
     * Do not edit by hand.
     */
    namespace app\models;

    use app\db\Connection;
    use app\db\QueryBuilder as Query;

    /** Application user record. */
    class User
    {
        use app\traits\Timestamps;

        /** string Active account state */
        const STATE_ACTIVE = 'active';
        /** @var string Display name */
        public $name;
        /** @var array */
        protected $attributes = [
            'role' => 'user',
        ];
        /**
         * Persist the record.
         * @param Connection $connection
         * @return bool
         */
        public function save(Connection $connection)
        {
            $saved = $connection->persist($this);
            if ($saved === false) {
                return false;
            } else {
                return true;
            }
        }
    }
    "#);
    Ok(())
}

#[test]
fn test_trait_assembly() -> phpgen::Result<()> {
    let code = TraitBuilder::new()
        .def_namespace("app\\traits")
        .def_name("Timestamps")
        .def_typed_property("createdAt", "int", None, Some("Unix timestamp"))?
        .def_protected()
        .end()?
        .def_method("touch")
        .def_line("$this->createdAt = time();")
        .end()?
        .render()?;

    insta::assert_snapshot!(code, @r#"
    namespace app\traits;

    trait Timestamps
    {
        /** @var int Unix timestamp */
        protected $createdAt;
        public function touch()
        {
            $this->createdAt = time();
        }
    }
    "#);
    Ok(())
}

#[test]
fn test_function_with_chain_statements() -> phpgen::Result<()> {
    let code = FunctionBuilder::new("guard")
        .def_line("before();")
        .def_if()
        .def_condition("a")
        .def_line("x;")
        .end()?
        .def_condition("b")
        .def_line("y;")
        .end()?
        .def_else()
        .def_line("z;")
        .end()?
        .end()?
        .def_line("after();")
        .render()?;

    insta::assert_snapshot!(code, @r#"
    function guard()
    {
        before();
        if (a) {
            x;
        } elseif (b) {
            y;
        } else {
            z;
        }
        after();
    }
    "#);
    Ok(())
}

#[test]
fn test_chain_feeds_exact_lines_in_order() -> phpgen::Result<()> {
    let chain = IfBuilder::new()
        .def_condition("a")
        .def_line("x;")
        .end()?
        .def_condition("b")
        .def_line("y;")
        .end()?
        .def_else()
        .def_line("z;")
        .end()?;

    let rendered = chain.render()?;
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        [
            "if (a) {",
            "    x;",
            "} elseif (b) {",
            "    y;",
            "} else {",
            "    z;",
            "}",
        ]
    );
    Ok(())
}

#[test]
fn test_sections_assemble_in_fixed_order() -> phpgen::Result<()> {
    // Methods land after properties and constants no matter the call order.
    let code = ClassBuilder::new()
        .def_namespace("app\\models")
        .def_name("Order")
        .def_method("total")
        .end()?
        .def_property("items")
        .end()?
        .def_constant("STATUS_OPEN")
        .def_value(1)
        .end()?
        .render()?;

    insta::assert_snapshot!(code, @r#"
    namespace app\models;

    class Order
    {
        const STATUS_OPEN = 1;
        public $items;
        public function total()
        {
        }
    }
    "#);
    Ok(())
}

#[test]
fn test_empty_children_contribute_nothing() -> phpgen::Result<()> {
    let code = ClassBuilder::new()
        .def_namespace("app\\models")
        .def_name("Empty")
        .def_comment()
        .end()?
        .render()?;

    assert_eq!(code, "namespace app\\models;\n\nclass Empty\n{\n}");
    Ok(())
}

#[test]
fn test_root_render_is_repeatable() -> phpgen::Result<()> {
    let class = ClassBuilder::new()
        .def_namespace("app\\models")
        .def_name("User")
        .def_property("name")
        .end()?;

    assert_eq!(class.render()?, class.render()?);
    Ok(())
}
