//! Built-in demo inputs used when no tree file or scan report is given.

use crate::remediation::domain::JFrogVulnerability;
use crate::shared::Result;

/// A Spring Boot service's `mvn dependency:tree` output
pub const SAMPLE_DEPENDENCY_TREE: &str = "\
com.random-x:part-finder-service-api:1.2.39-SNAPSHOT
├── org.springframework.boot:spring-boot-starter-tomcat:3.5.3
│   ├── org.apache.tomcat.embed:tomcat-embed-core:10.1.42
│   │   ├── jakarta.servlet:jakarta.servlet-api:6.0.0
│   │   ├── org.apache.tomcat.embed:tomcat-embed-el:10.1.42
│   │   └── org.apache.tomcat.embed:tomcat-embed-websocket:10.1.42
│
├── org.springframework.boot:spring-boot-starter-web:3.5.3
│   ├── org.springframework.boot:spring-boot-starter:3.5.3
│   │   ├── org.springframework.boot:spring-boot:3.5.3
│   │   │   └── org.springframework:spring-core:6.2.8
│   │   │       └── org.springframework:spring-jcl:6.2.8
│   │   ├── org.springframework.boot:spring-boot-autoconfigure:3.5.3
│   │   └── org.springframework.boot:spring-boot-starter-logging:3.5.3
│   │       ├── ch.qos.logback:logback-classic:1.5.3
│   │       │   └── ch.qos.logback:logback-core:1.5.3
│   │       ├── org.apache.logging.log4j:log4j-to-slf4j:2.23.1
│   │       └── org.slf4j:jul-to-slf4j:2.0.13
│   ├── org.springframework:spring-web:6.2.8
│   │   └── org.springframework:spring-beans:6.2.8
│   └── org.springframework:spring-webmvc:6.2.8
│       ├── org.springframework:spring-aop:6.2.8
│       ├── org.springframework:spring-context:6.2.8
│       │   └── org.springframework:spring-expression:6.2.8
│       └── org.springframework:spring-core:6.2.8
│
├── org.springframework.boot:spring-boot-starter-json:3.5.3
│   ├── com.fasterxml.jackson.core:jackson-databind:2.19.1
│   ├── com.fasterxml.jackson.core:jackson-annotations:2.19.1
│   ├── com.fasterxml.jackson.core:jackson-core:2.19.1
│   ├── com.fasterxml.jackson.datatype:jackson-datatype-jdk8:2.19.1
│   ├── com.fasterxml.jackson.datatype:jackson-datatype-jsr310:2.19.1
│   ├── com.fasterxml.jackson.module:jackson-module-parameter-names:2.19.1
│   └── com.fasterxml.jackson.dataformat:jackson-dataformat-yaml:2.19.1
│
├── org.springframework.boot:spring-boot-starter-validation:3.5.3
│   ├── org.hibernate.validator:hibernate-validator:8.0.2.Final
│   │   ├── jakarta.validation:jakarta.validation-api:3.0.2
│   │   ├── org.jboss.logging:jboss-logging:3.6.1.Final
│   │   └── com.fasterxml.jackson:classmate:1.7.0
│   └── org.springframework:spring-context:6.2.8
│
├── org.springframework.boot:spring-boot-starter-data-jpa:3.5.3
│   ├── org.springframework.data:spring-data-jpa:3.5.3
│   │   └── org.springframework.data:spring-data-commons:3.5.3
│   ├── org.hibernate.orm:hibernate-core:6.6.9.Final
│   │   ├── jakarta.persistence:jakarta.persistence-api:3.1.0
│   │   └── jakarta.transaction:jakarta.transaction-api:2.0.1
│   └── org.springframework:spring-jdbc:6.2.8
│
├── org.springframework.boot:spring-boot-starter-actuator:3.5.3
│   └── io.micrometer:micrometer-core:1.15.3
│       ├── io.micrometer:micrometer-commons:1.15.3
│       └── io.micrometer:micrometer-observation:1.15.3
│
├── io.micrometer:micrometer-core:1.13.5
│   ├── org.hdrhistogram:HdrHistogram:2.2.2
│   └── org.latencyutils:LatencyUtils:2.0.3
│
├── mysql:mysql-connector-java:5.1.47
│
├── com.random-x.platform.data:random-x-cassandra:4.19.0.3
│   ├── com.random-x.platform.data:random-x-dxs:0.0.17
│   └── com.random-x.platform.data:daf-basic-util:1.2.1
│
├── com.random-x.platform.data:sam-utils-lib:1.2.1
├── com.random-x.platform.data:metric-server:3.1.1
│
├── io.netty:netty-buffer:4.1.122.Final
├── io.netty:netty-transport:4.1.122.Final
├── io.netty:netty-handler:4.1.122.Final
│   ├── io.netty:netty-codec:4.1.122.Final
│   └── io.netty:netty-transport-native-unix-common:4.1.122.Final
│
├── org.apache.cassandra:java-driver-core:4.19.0
│   ├── com.datastax.oss:native-protocol:1.5.1
│   ├── org.apache.cassandra:java-driver-guava-shaded:4.19.0
│   └── com.typesafe:config:1.4.1
│
├── com.hazelcast:hazelcast:4.2.6
├── com.hazelcast:hazelcast-kubernetes:2.2
│
├── org.ehcache:ehcache:3.10.8
│   └── org.glassfish.jaxb:jaxb-runtime:4.0.5
│
├── org.apache.logging.log4j:log4j-api:2.24.3
├── org.apache.logging.log4j:log4j-core:2.24.3
│   └── org.apache.logging.log4j:log4j-slf4j2-impl:2.24.3
│
├── com.google.guava:guava:29.0-jre
├── commons-fileupload:commons-fileupload:1.6.0
├── commons-io:commons-io:2.7
├── commons-codec:commons-codec:1.18.0
├── org.apache.commons:commons-lang3:3.4
├── org.apache.commons:commons-text:1.4
│
├── org.springdoc:springdoc-openapi-starter-webmvc-ui:2.8.9
├── org.webjars:swagger-ui:5.21.0
├── com.jayway.jsonpath:json-path:2.7.0
├── org.jsoup:jsoup:1.15.3
├── com.google.code.gson:gson:2.13.1
│
└── jakarta.annotation:jakarta.annotation-api:1.3.5
";

/// Findings as a scanner would report them for [`SAMPLE_DEPENDENCY_TREE`]
pub fn sample_vulnerabilities() -> Result<Vec<JFrogVulnerability>> {
    let samples: [(&str, &str, &[&str], &str, &str, &str); 3] = [
        (
            "org.apache.tomcat.embed:tomcat-embed-core",
            "10.1.42",
            &["10.1.45", "10.1.44", "10.1.43"],
            "CVE-2024-XXXX",
            "HIGH",
            "Remote code execution vulnerability in Tomcat embedded server",
        ),
        (
            "com.fasterxml.jackson.core:jackson-databind",
            "2.19.1",
            &["2.19.5", "2.19.4", "2.19.3", "2.19.2"],
            "CVE-2024-YYYY",
            "CRITICAL",
            "Deserialization vulnerability allowing arbitrary code execution",
        ),
        (
            "org.apache.logging.log4j:log4j-core",
            "2.24.3",
            &["2.24.5", "2.24.4"],
            "CVE-2024-ZZZZ",
            "MEDIUM",
            "Denial of service vulnerability in Log4j",
        ),
    ];

    samples
        .into_iter()
        .map(|(ga, version, fixes, cve, severity, description)| {
            JFrogVulnerability::new(
                ga.to_string(),
                version.to_string(),
                fixes.iter().map(|f| f.to_string()).collect(),
                cve.to_string(),
                severity.to_string(),
                description.to_string(),
            )
        })
        .collect()
}
