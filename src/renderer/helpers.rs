//! Template functions exposed to block code.
//!
//! Each helper is a callable minijinja object bound to the session of the
//! current render. Results are marked safe: they are already rendered markup
//! and must not be escaped again by the calling block.

use super::session::Session;
use crate::error::Result;
use minijinja::{
    value::{from_args, Object, ObjectRepr, Value},
    Environment, State,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Inset,
    InsetIf,
    Loop,
    Head,
    End,
}

/// Template function names and the helper each one calls.
const FUNCTIONS: &[(&str, Kind)] = &[
    ("inset", Kind::Inset),
    ("inset_if", Kind::InsetIf),
    ("loop", Kind::Loop),
    // `loop` is shadowed inside `{% for %}` bodies.
    ("each", Kind::Loop),
    ("head", Kind::Head),
    ("end", Kind::End),
];

#[derive(Debug)]
struct Helper {
    kind: Kind,
    session: Arc<Session>,
}

impl Helper {
    fn dispatch(&self, env: &Environment<'_>, args: &[Value]) -> Result<String> {
        let session = &self.session;
        match self.kind {
            Kind::Inset => {
                let (block, vars): (String, Option<Value>) = from_args(args)?;
                session.inset(env, &block, defined(vars.as_ref()))
            }
            Kind::InsetIf => {
                let (condition, block, vars): (Value, String, Option<Value>) = from_args(args)?;
                session.inset_if(env, condition.is_true(), &block, defined(vars.as_ref()))
            }
            Kind::Loop => {
                let (collection, block, empty_block): (Value, String, Option<String>) =
                    from_args(args)?;
                session.each(env, &collection, &block, empty_block.as_deref())
            }
            Kind::Head => {
                let () = from_args(args)?;
                session.head(env)
            }
            Kind::End => {
                let () = from_args(args)?;
                session.end(env)
            }
        }
    }
}

impl Object for Helper {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn call(
        self: &Arc<Self>,
        state: &State<'_, '_>,
        args: &[Value],
    ) -> Result<Value, minijinja::Error> {
        self.dispatch(state.env(), args)
            .map(Value::from_safe_string)
            .map_err(|err| err.into_template_error())
    }
}

/// Treats `none` and undefined call-site variables as absent.
fn defined(vars: Option<&Value>) -> Option<&Value> {
    vars.filter(|vars| !vars.is_undefined() && !vars.is_none())
}

/// Registers every helper as a global function bound to `session`.
pub(crate) fn register(env: &mut Environment<'_>, session: &Arc<Session>) {
    for (name, kind) in FUNCTIONS {
        let helper = Helper { kind: *kind, session: Arc::clone(session) };
        env.add_global(*name, Value::from_object(helper));
    }
}
