use crate::convert::DEFAULT_BASE;

/// Template written by `xget --init`.
pub fn generate_init_template() -> String {
	format!(
		r#"# xget configuration
# Files named .xget.toml are collected from the current directory upwards,
# then from ~/.xget.toml. The most specific `base` wins; rules from every file
# are checked in that order, ahead of the built-in platforms.

# Stop looking in parent directories
root = true

# Base domain that rewritten URLs are rooted at.
# Overridden by XGET_BASE and by --base.
base = "{DEFAULT_BASE}"

# Extra platforms. First matching rule wins.
#
# [[rules]]
# id = "internal-git"
# name = "Internal Git"
# prefix = "igit"
# hosts = ["git.example.com"]
# description = "Company Git server"
# path_prefix = "/mirrors/"        # or: path_pattern = "^/v2/"
# community_host = "community.git.example.com"
"#
	)
}
