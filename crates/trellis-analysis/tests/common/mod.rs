//! Shared fixtures: a compliant hexagonal Kotlin service, on disk and as facts.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use trellis_analysis::scanner::{FactModel, ReadmeFacts};

pub const PACKAGE: &str = "src/main/kotlin/com/acme/orders";
pub const TEST_PACKAGE: &str = "src/test/kotlin/com/acme/orders";

pub const README: &str = "# Orders Service\n\n## Overview\nOrders.\n\n## Tech Stack\nKotlin, Spring Boot.\n\n## Architecture\nHexagonal.\n\n## Setup\n```bash\n# not a heading\n./gradlew build\n```\n\n## API\nSee openapi.yaml.\n\n## Testing\n./gradlew test\n\n## Deployment\nECS.\n";

pub const KOVER_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<report name="orders">
  <package name="com/acme/orders">
    <counter type="LINE" missed="40" covered="60"/>
  </package>
  <counter type="INSTRUCTION" missed="10" covered="90"/>
  <counter type="LINE" missed="2" covered="98"/>
</report>
"#;

/// Package directories of the compliant layout, relative to [`PACKAGE`].
pub const PACKAGES: &[&str] = &[
    "domain",
    "domain/model",
    "domain/port",
    "domain/service",
    "application",
    "adapter",
    "adapter/inbound",
    "adapter/outbound",
    "config",
];

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Write a project that satisfies every built-in rule.
pub fn write_compliant_project(root: &Path) {
    write(root, "build.gradle.kts", "plugins { kotlin(\"jvm\") }\n");
    write(root, "README.md", README);
    write(root, "openapi.yaml", "openapi: 3.0.3\n");
    write(root, "build/reports/kover/report.xml", KOVER_REPORT);
    for package in PACKAGES {
        fs::create_dir_all(root.join(PACKAGE).join(package)).unwrap();
    }
    write(
        root,
        &format!("{PACKAGE}/domain/model/Order.kt"),
        "package com.acme.orders.domain.model\n\nimport java.time.Instant\n\ndata class Order(val id: String, val at: Instant)\n",
    );
    write(
        root,
        &format!("{PACKAGE}/adapter/outbound/OrderRepository.kt"),
        "package com.acme.orders.adapter.outbound\n\nimport com.acme.orders.domain.model.Order\nimport software.amazon.awssdk.services.dynamodb.DynamoDbClient\n\nclass OrderRepository\n",
    );
    write(
        root,
        &format!("{PACKAGE}/OrdersApplication.kt"),
        "package com.acme.orders\n\nimport org.springframework.boot.autoconfigure.SpringBootApplication\n\n@SpringBootApplication\nclass OrdersApplication\n",
    );
    write(
        root,
        &format!("{TEST_PACKAGE}/OrderServiceTest.kt"),
        "package com.acme.orders\n\nimport org.junit.jupiter.api.Test\n\nclass OrderServiceTest\n",
    );
}

fn ancestors(path: &str) -> Vec<String> {
    let parts: Vec<&str> = path.split('/').collect();
    (1..=parts.len()).map(|n| parts[..n].join("/")).collect()
}

/// The fact model of [`write_compliant_project`], built in memory.
pub fn compliant_facts() -> FactModel {
    let mut directories = BTreeSet::new();
    for package in PACKAGES {
        directories.extend(ancestors(&format!("{PACKAGE}/{package}")));
    }
    directories.extend(ancestors(TEST_PACKAGE));

    let files = [
        "build.gradle.kts".to_string(),
        "README.md".to_string(),
        "openapi.yaml".to_string(),
        format!("{PACKAGE}/domain/model/Order.kt"),
        format!("{PACKAGE}/OrdersApplication.kt"),
        format!("{TEST_PACKAGE}/OrderServiceTest.kt"),
    ]
    .into_iter()
    .collect();

    let mut model = FactModel {
        files,
        directories,
        coverage_percent: Some(98.0),
        readme: Some(ReadmeFacts {
            path: "README.md".to_string(),
            headings: [
                "overview",
                "tech stack",
                "architecture",
                "setup",
                "api",
                "testing",
                "deployment",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }),
        ..Default::default()
    };
    model.imports.insert(
        format!("{PACKAGE}/domain/model/Order.kt"),
        ["java.time.Instant".to_string()].into_iter().collect(),
    );
    model
}

/// Remove `dir` and everything below it from the fact model.
pub fn remove_directory(model: &mut FactModel, dir: &str) {
    let prefix = format!("{dir}/");
    model
        .directories
        .retain(|d| d != dir && !d.starts_with(&prefix));
    model.files.retain(|f| !f.starts_with(&prefix));
    model.imports.retain(|f, _| !f.starts_with(&prefix));
}
