//! Filter Registry
//!
//! Explicit name → function table built once at startup and handed to the
//! template layer by reference. A function is stored under its canonical
//! name; any number of extra names can point at it.

use crate::{EvalContext, FunctionMeta, FunctionPlugin};
use haconv_core::{HaConvError, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// Central filter registry
pub struct FilterRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
    aliases: HashMap<String, String>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    /// Register `alias` as another name for the function `target`
    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.insert(alias.to_lowercase(), target.to_lowercase());
        self
    }

    /// Look up by canonical name or alias (case-insensitive)
    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        let key = name.to_lowercase();
        if let Some(f) = self.functions.get(&key) {
            return Some(f.as_ref());
        }
        self.aliases
            .get(&key)
            .and_then(|canonical| self.functions.get(canonical))
            .map(|f| f.as_ref())
    }

    /// Every name a template can use, canonical names and aliases alike
    pub fn names(&self) -> Vec<String> {
        let live_aliases = self.aliases.iter()
            .filter(|(_, target)| self.functions.contains_key(target.as_str()))
            .map(|(alias, _)| alias);
        let mut names: Vec<String> = self.functions.keys()
            .chain(live_aliases)
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Aliases pointing at a canonical name, sorted
    pub fn aliases_of(&self, canonical: &str) -> Vec<String> {
        let canonical = canonical.to_lowercase();
        let mut aliases: Vec<String> = self.aliases.iter()
            .filter(|(_, target)| **target == canonical)
            .map(|(alias, _)| alias.clone())
            .collect();
        aliases.sort();
        aliases
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => f.call(args, ctx),
            None => {
                let similar = self.find_similar_functions(name);
                let mut err = HaConvError::undefined_filter(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use help() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Find registered names similar to the given name (for error suggestions)
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.names().into_iter()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&name_lower, &candidate);
                if score > 0 {
                    Some((candidate, score))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.get_function(name) {
            Some(f) => Value::Object(self.function_to_help(f.meta())),
            None => Value::Error(HaConvError::undefined_filter(name)),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, f) in &self.functions {
            let cat = f.meta().category.to_string();
            funcs_by_cat.entry(cat).or_default().push(name.clone());
        }
        help.insert("filters".to_string(),
            Value::Object(funcs_by_cat.into_iter()
                .map(|(k, mut v)| {
                    v.sort();
                    (k, Value::List(v.into_iter().map(Value::Text).collect()))
                })
                .collect()));

        help.insert("names".to_string(),
            Value::List(self.names().into_iter().map(Value::Text).collect()));

        help.insert("usage".to_string(),
            Value::Text("Call help('filter_name') for detailed help.".to_string()));

        Value::Object(help)
    }

    fn function_to_help(&self, meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert("aliases".to_string(), Value::List(
            self.aliases_of(meta.name).into_iter().map(Value::Text).collect()
        ));
        help.insert("args".to_string(), Value::List(
            meta.args.iter().map(|a| {
                let mut arg = HashMap::new();
                arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                arg.insert("optional".to_string(), Value::Bool(a.optional));
                if let Some(default) = a.default {
                    arg.insert("default".to_string(), Value::Text(default.to_string()));
                }
                Value::Object(arg)
            }).collect()
        ));
        help.insert("examples".to_string(), Value::List(
            meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()
        ));
        help.insert("related".to_string(), Value::List(
            meta.related.iter().map(|r| Value::Text(r.to_string())).collect()
        ));
        help
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut metas: Vec<FunctionMeta> = self.functions.values()
            .map(|f| f.meta())
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();
        metas.sort_by_key(|m| m.name);

        let funcs: Vec<Value> = metas.into_iter()
            .map(|meta| {
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                Value::Object(obj)
            })
            .collect();
        Value::List(funcs)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgMeta;

    struct Double;

    static DOUBLE_ARGS: [ArgMeta; 1] = [ArgMeta::required("value", "Number", "Value to double")];

    impl FunctionPlugin for Double {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "double",
                description: "Multiply by two",
                usage: "value | double",
                args: &DOUBLE_ARGS,
                returns: "Number",
                examples: &[],
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
            match args.first().map(|v| v.to_finite()) {
                Some(Ok(n)) => Value::Number(n * 2.0),
                _ => Value::Null,
            }
        }
    }

    fn registry() -> FilterRegistry {
        FilterRegistry::new()
            .with_function(Double)
            .with_alias("dbl", "double")
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let r = registry();
        assert!(r.get_function("double").is_some());
        assert!(r.get_function("DBL").is_some());
        assert!(r.get_function("triple").is_none());
    }

    #[test]
    fn test_call_through_alias() {
        let r = registry();
        let ctx = EvalContext::new();
        assert_eq!(r.call_function("dbl", &[Value::Number(2.0)], &ctx), Value::Number(4.0));
    }

    #[test]
    fn test_unknown_filter_suggests() {
        let r = registry();
        let result = r.call_function("doubl", &[Value::Number(1.0)], &EvalContext::new());
        let err = result.as_error().unwrap();
        assert_eq!(err.code, haconv_core::codes::UNDEFINED_FILTER);
        assert!(err.suggestion.as_deref().unwrap().contains("double"));
    }

    #[test]
    fn test_names_include_aliases() {
        let r = registry().with_alias("orphan", "missing");
        assert_eq!(r.names(), vec!["dbl".to_string(), "double".to_string()]);
    }

    #[test]
    fn test_help_for_lists_aliases() {
        let r = registry();
        let help = r.help(Some("dbl"));
        let obj = help.as_object().unwrap();
        assert_eq!(obj.get("name"), Some(&Value::Text("double".to_string())));
        assert_eq!(obj.get("aliases"), Some(&Value::List(vec![Value::Text("dbl".to_string())])));
    }

    #[test]
    fn test_help_unknown() {
        assert!(registry().help(Some("nope")).is_error());
    }

    #[test]
    fn test_list_functions_by_category() {
        let r = registry();
        assert_eq!(r.list_functions(Some("test")).as_list().unwrap().len(), 1);
        assert!(r.list_functions(Some("power")).as_list().unwrap().is_empty());
    }
}
