//! The standard web-application preset.
//!
//! Reproduces the configuration a typical babel + sass/less + html project
//! needs, conditioned on the build mode. Mode conditioning is ordinary data
//! branching: production and development fragments are computed from the mode
//! decided once by the caller, so no conditional survives into the emitted
//! object.

use std::path::Path;

use serde_json::json;

use crate::assembler::ConfigAssembler;
use crate::dev::DevServerOptions;
use crate::mode::BuildMode;
use crate::output::{CacheGroup, OutputOptions, SplitChunks};
use crate::plugin::PluginDescriptor;
use crate::rule::{LoaderStep, MatchPattern, Rule};

/// Assemble the standard web-app configuration rooted at `root`.
///
/// Returns the assembler rather than a finalized config so callers can layer
/// project-manifest overrides on top before calling
/// [`ConfigAssembler::finalize`].
pub fn web_app(mode: BuildMode, root: &Path) -> ConfigAssembler {
    let src = root.join("src");

    let mut assembler = ConfigAssembler::new(mode)
        .output(OutputOptions::new(root.join("dist"), "[name].js"))
        .alias("@", &src);

    // Development serves from memory with a polyfilled entry; production
    // bundles the bare entry.
    assembler = match mode {
        BuildMode::Production => assembler.entry("index", "./src/index.js"),
        BuildMode::Development => assembler
            .entry("index", "@babel/polyfill")
            .entry("index", "./src/index.js")
            .devtool("source-map"),
    };

    assembler = script_rules(assembler, &src);
    assembler = asset_rules(assembler);
    assembler = style_rules(assembler, mode);

    assembler = assembler.rule(
        "html",
        Rule::new(MatchPattern::extensions(["htm", "html"])).step(
            LoaderStep::new("html", "html-loader").with_options(json!({ "minimize": true })),
        ),
    );

    assembler = assembler.plugin(html_plugin());

    if mode.is_production() {
        assembler = production_outputs(assembler, root);
    } else {
        assembler = assembler.dev_server(
            DevServerOptions::new("localhost", 8080).open(cfg!(target_os = "macos")),
        );
    }

    assembler
}

fn script_rules(assembler: ConfigAssembler, src: &Path) -> ConfigAssembler {
    assembler.rule(
        "compile",
        Rule::new(MatchPattern::extension("js"))
            .include(src)
            .exclude("node_modules")
            .step(LoaderStep::new("babel", "babel-loader").with_options(json!({
                "presets": ["@babel/preset-env"],
                "plugins": ["@babel/plugin-proposal-class-properties"]
            }))),
    )
}

fn asset_rules(assembler: ConfigAssembler) -> ConfigAssembler {
    assembler
        .rule(
            "images",
            Rule::new(MatchPattern::extensions(["png", "jpg", "jpeg", "gif"])).step(
                LoaderStep::new("url-loader", "url-loader").with_options(json!({
                    "limit": 1024,
                    "name": "images/[name].[ext]"
                })),
            ),
        )
        .rule(
            "svg",
            // query suffixes like icon.svg?inline still match
            Rule::new(MatchPattern::raw(r"\.(svg)(\?.*)?$").expect("static pattern")).step(
                // SVGs above the inline threshold fall back to plain files
                LoaderStep::new("url-loader", "url-loader").with_options(json!({
                    "limit": 3072,
                    "fallback": "file-loader"
                })),
            ),
        )
        .rule(
            "fonts",
            Rule::new(
                MatchPattern::raw(r"(?i)\.(woff2?|eot|ttf|otf)(\?.*)?$").expect("static pattern"),
            )
            .step(
                LoaderStep::new("url-loader", "url-loader").with_options(json!({
                    "limit": 10000,
                    "fallback": {
                        "loader": "file-loader",
                        "options": { "name": "fonts/[name].[ext]" }
                    }
                })),
            ),
        )
}

/// Style pipeline. The first step of the shared "css" rule is the only
/// mode-conditioned step: extraction in production, inline style injection in
/// development. The remaining steps are appended afterwards, which is what
/// keeps the engine's last-registered-first application order intact.
fn style_rules(assembler: ConfigAssembler, mode: BuildMode) -> ConfigAssembler {
    let stylesheet = || MatchPattern::raw(r"\.(sa|sc|c)ss$").expect("static pattern");

    let head = match mode {
        BuildMode::Production => LoaderStep::new("style", "mini-css-extract-plugin/loader"),
        BuildMode::Development => LoaderStep::new("style-loader", "style-loader"),
    };

    assembler
        .rule("css", Rule::new(stylesheet()).step(head))
        .rule(
            "css",
            Rule::new(stylesheet())
                .step(LoaderStep::new("css", "css-loader"))
                .step(LoaderStep::new("postcss-loader", "postcss-loader")),
        )
        .rule(
            "scss",
            Rule::new(MatchPattern::raw(r"\.(sa|sc)ss$").expect("static pattern"))
                .step(LoaderStep::new("sass-loader", "sass-loader")),
        )
        .rule(
            "less",
            Rule::new(MatchPattern::extension("less"))
                .step(LoaderStep::new("less-loader", "less-loader")),
        )
}

fn html_plugin() -> PluginDescriptor {
    PluginDescriptor::new("html", "html-webpack-plugin").with_options(json!({
        "template": "./public/index.html",
        "filename": "index.html",
        "chunksSortMode": "none",
        "xhtml": true,
        "minify": {
            "collapseWhitespace": false,
            "conservativeCollapse": false,
            "removeAttributeQuotes": false,
            "useShortDoctype": false,
            "removeComments": true,
            "collapseBooleanAttributes": true,
            "removeScriptTypeAttributes": true
        }
    }))
}

fn production_outputs(assembler: ConfigAssembler, root: &Path) -> ConfigAssembler {
    let mut split_chunks = SplitChunks::default();
    split_chunks.cache_groups.insert(
        "commons".to_string(),
        CacheGroup {
            chunks: "initial".to_string(),
            name: "common".to_string(),
            min_chunks: 2,
            max_initial_requests: 5,
            min_size: 0,
            reuse_existing_chunk: true,
        },
    );

    assembler
        .plugin(
            PluginDescriptor::new("clear", "clean-webpack-plugin")
                .with_options(json!({ "paths": [root.join("dist")] })),
        )
        .plugin(PluginDescriptor::new("js", "uglifyjs-webpack-plugin").with_options(json!({})))
        .plugin(
            PluginDescriptor::new("extract-css", "mini-css-extract-plugin").with_options(json!({
                "filename": "css/[name].css",
                "chunkFilename": "css/[name].css"
            })),
        )
        .split_chunks(split_chunks)
}
