//! Platform rule catalog.
//!
//! This module handles:
//! - The static, ordered table of built-in platform rules
//! - Combining user-defined rules with the built-in table
//! - Auditing rule order for rules that can never be selected

pub mod builtin;
pub mod types;

pub use builtin::{BUILTIN_RULES, BuiltinRule};
pub use types::{PathTransform, PlatformRule, RuleMatcher};

use crate::error::{Result, XgetError};
use crate::rules::matcher::host_accepted;
use std::collections::HashSet;

/// Ordered, immutable set of platform rules.
///
/// Built once at start-up and passed by reference to the converter. Order is
/// priority: the first matching rule wins.
#[derive(Debug, Clone)]
pub struct Catalog {
	rules: Vec<PlatformRule>,
}

impl Catalog {
	/// Catalog containing only the built-in rules.
	pub fn builtin() -> Self {
		Catalog {
			rules: BUILTIN_RULES.iter().map(PlatformRule::from).collect(),
		}
	}

	/// Catalog with `user_rules` placed ahead of the built-in rules.
	pub fn with_rules(user_rules: Vec<PlatformRule>) -> Result<Self> {
		let mut rules = user_rules;
		rules.extend(BUILTIN_RULES.iter().map(PlatformRule::from));
		Self::from_rules(rules)
	}

	/// Catalog from an explicit rule list, in the given order.
	///
	/// Rejects duplicate ids. Rules that are shadowed by an earlier rule are
	/// accepted but logged.
	pub fn from_rules(rules: Vec<PlatformRule>) -> Result<Self> {
		let mut seen = HashSet::new();
		for rule in &rules {
			if !seen.insert(rule.id.as_str()) {
				return Err(XgetError::DuplicateRuleId {
					id: rule.id.clone(),
				});
			}
		}

		let catalog = Catalog { rules };
		for (shadowed, by) in catalog.unreachable_rules() {
			tracing::warn!(
				rule = %shadowed.id,
				shadowed_by = %by.id,
				"platform rule can never be selected"
			);
		}
		Ok(catalog)
	}

	/// The rules in priority order.
	pub fn rules(&self) -> &[PlatformRule] {
		&self.rules
	}

	/// Look up a rule by id.
	pub fn get(&self, id: &str) -> Option<&PlatformRule> {
		self.rules.iter().find(|rule| rule.id == id)
	}

	/// Copies of all rules, for help and listing surfaces.
	pub fn list_supported_platforms(&self) -> Vec<PlatformRule> {
		self.rules.clone()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Rules that can never win, paired with the earlier rule shadowing them.
	///
	/// A rule is shadowed when an earlier rule without a predicate accepts
	/// every one of its hosts (and therefore every subdomain of them).
	pub fn unreachable_rules(&self) -> Vec<(&PlatformRule, &PlatformRule)> {
		let mut unreachable = Vec::new();

		for (index, rule) in self.rules.iter().enumerate() {
			let shadowing = self.rules[..index].iter().find(|earlier| {
				!earlier.is_narrowed()
					&& rule.hosts.iter().all(|host| {
						earlier
							.hosts
							.iter()
							.any(|entry| host_accepted(host, entry))
					})
			});

			if let Some(earlier) = shadowing {
				unreachable.push((rule, earlier));
			}
		}

		unreachable
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::builtin()
	}
}
