use crate::catalog::types::{PathTransform, PlatformRule, RuleMatcher};

/// Static description of a built-in platform rule.
///
/// Kept as plain data so the table order and host overlaps can be audited
/// without constructing any matcher.
#[derive(Debug)]
pub struct BuiltinRule {
	pub id: &'static str,
	pub name: &'static str,
	pub prefix: &'static str,
	pub hosts: &'static [&'static str],
	pub description: &'static str,

	/// Case-insensitive path prefix narrowing the rule.
	pub path_prefix: Option<&'static str>,

	/// Hostname whose paths get a `community/` segment.
	pub community_host: Option<&'static str>,
}

const GITHUB_HOSTS: &[&str] = &[
	"github.com",
	"gist.github.com",
	"raw.githubusercontent.com",
	"codeload.github.com",
	"objects.githubusercontent.com",
	"media.githubusercontent.com",
	"githubusercontent.com",
];

const HUGGING_FACE_HOSTS: &[&str] = &["huggingface.co", "cdn-lfs.huggingface.co"];

const CIVITAI_HOSTS: &[&str] = &["civitai.com", "cdn.civitai.com"];

const CONTAINER_HOSTS: &[&str] = &[
	"ghcr.io",
	"registry.k8s.io",
	"k8s.gcr.io",
	"gcr.io",
	"index.docker.io",
	"registry-1.docker.io",
	"docker.io",
	"quay.io",
	"mcr.microsoft.com",
	"public.ecr.aws",
];

const AI_PROVIDER_HOSTS: &[&str] = &[
	"api.openai.com",
	"api.anthropic.com",
	"generativelanguage.googleapis.com",
	"api.mistral.ai",
	"api.cohere.ai",
	"api.groq.com",
];

const COMMUNITY_SEGMENT: &str = "community";

const fn plain(
	id: &'static str,
	name: &'static str,
	prefix: &'static str,
	hosts: &'static [&'static str],
	description: &'static str,
) -> BuiltinRule {
	BuiltinRule {
		id,
		name,
		prefix,
		hosts,
		description,
		path_prefix: None,
		community_host: None,
	}
}

/// Built-in rules in priority order. First match wins.
///
/// `homebrew` shares `github.com` with `github` and must stay ahead of it,
/// otherwise it can never be selected.
pub const BUILTIN_RULES: &[BuiltinRule] = &[
	BuiltinRule {
		path_prefix: Some("/homebrew/"),
		..plain(
			"homebrew",
			"Homebrew",
			"homebrew",
			&["github.com"],
			"Homebrew project mirror",
		)
	},
	plain(
		"github",
		"GitHub",
		"gh",
		GITHUB_HOSTS,
		"GitHub repositories, releases and gists",
	),
	plain(
		"gitlab",
		"GitLab",
		"gl",
		&["gitlab.com", "gitlab-static.net"],
		"GitLab SaaS resources",
	),
	plain("gitea", "Gitea", "gitea", &["gitea.com"], "Gitea hosted platform"),
	plain(
		"codeberg",
		"Codeberg",
		"codeberg",
		&["codeberg.org"],
		"Codeberg repositories and attachments",
	),
	plain(
		"sourceforge",
		"SourceForge",
		"sf",
		&["sourceforge.net", "downloads.sourceforge.net", "downloads.sf.net"],
		"SourceForge project downloads",
	),
	plain(
		"aosp",
		"AOSP",
		"aosp",
		&["android.googlesource.com"],
		"AOSP Git repositories",
	),
	plain(
		"huggingface",
		"Hugging Face",
		"hf",
		HUGGING_FACE_HOSTS,
		"Models, datasets and inference endpoints",
	),
	plain("civitai", "Civitai", "civitai", CIVITAI_HOSTS, "AI model marketplace"),
	plain(
		"npm",
		"npm",
		"npm",
		&["registry.npmjs.org", "registry.yarnpkg.com"],
		"npm registry",
	),
	plain(
		"pypi",
		"PyPI",
		"pypi",
		&["pypi.org", "files.pythonhosted.org"],
		"Python packages",
	),
	BuiltinRule {
		community_host: Some("conda.anaconda.org"),
		..plain(
			"conda",
			"conda",
			"conda",
			&["repo.anaconda.com", "conda.anaconda.org"],
			"Anaconda official and community channels",
		)
	},
	plain(
		"maven",
		"Maven Central",
		"maven",
		&["repo1.maven.org", "repo.maven.apache.org"],
		"Maven Central repository",
	),
	plain(
		"apache",
		"Apache Downloads",
		"apache",
		&["downloads.apache.org", "archive.apache.org"],
		"Apache download mirrors",
	),
	plain(
		"gradle",
		"Gradle",
		"gradle",
		&["plugins.gradle.org", "services.gradle.org"],
		"Gradle plugin portal",
	),
	plain(
		"rubygems",
		"RubyGems",
		"rubygems",
		&["rubygems.org"],
		"RubyGems packages and API",
	),
	plain("cran", "CRAN", "cran", &["cran.r-project.org"], "CRAN mirror"),
	plain(
		"cpan",
		"CPAN",
		"cpan",
		&["www.cpan.org", "cpan.metacpan.org"],
		"Perl module mirror",
	),
	plain("nuget", "NuGet", "nuget", &["api.nuget.org"], "NuGet packages"),
	plain(
		"crates",
		"Rust Crates",
		"crates",
		&["crates.io", "static.crates.io"],
		"Rust packages",
	),
	plain(
		"container",
		"Container Registries",
		"cr",
		CONTAINER_HOSTS,
		"Common container image registries",
	),
	plain(
		"ai-provider",
		"AI Inference Providers",
		"ip",
		AI_PROVIDER_HOSTS,
		"AI inference API endpoints",
	),
];

impl From<&BuiltinRule> for PlatformRule {
	fn from(builtin: &BuiltinRule) -> Self {
		let matcher = builtin.path_prefix.map(|prefix| RuleMatcher::PathPrefix {
			prefix: prefix.to_string(),
			case_insensitive: true,
		});

		let transform = match builtin.community_host {
			Some(host) => PathTransform::HostSegment {
				host: host.to_string(),
				segment: COMMUNITY_SEGMENT.to_string(),
			},
			None => PathTransform::StripLeadingSlash,
		};

		PlatformRule {
			id: builtin.id.to_string(),
			name: builtin.name.to_string(),
			prefix: builtin.prefix.to_string(),
			hosts: builtin.hosts.iter().map(|h| h.to_string()).collect(),
			description: builtin.description.to_string(),
			matcher,
			transform,
		}
	}
}
