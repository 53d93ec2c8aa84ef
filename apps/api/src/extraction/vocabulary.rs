//! Fixed keyword vocabularies. All entries are lowercase; entries containing
//! a space are phrases and match by substring, the rest by whole word.

/// Skill keywords: general software engineering, web, cloud/devops,
/// data/ML, and hardware/embedded/VLSI.
pub const SKILL_KEYWORDS: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "golang",
    "rust",
    "ruby",
    "php",
    "kotlin",
    "swift",
    "scala",
    "perl",
    "matlab",
    "bash",
    "shell scripting",
    // Web
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring boot",
    "spring",
    "laravel",
    "rails",
    "graphql",
    "rest api",
    "microservices",
    // Data stores
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "cassandra",
    // Cloud / devops
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "linux",
    "git",
    "ci/cd",
    "devops",
    "cloud computing",
    // Data / ML
    "machine learning",
    "deep learning",
    "data science",
    "data analysis",
    "natural language processing",
    "computer vision",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "pandas",
    "numpy",
    "spark",
    "hadoop",
    "tableau",
    "power bi",
    // Hardware / embedded / VLSI
    "verilog",
    "systemverilog",
    "vhdl",
    "vlsi",
    "fpga",
    "asic",
    "uvm",
    "rtl design",
    "physical design",
    "static timing analysis",
    "embedded c",
    "embedded systems",
    "microcontroller",
    "arduino",
    "raspberry pi",
    "rtos",
    "pcb design",
    "cadence",
    "synopsys",
    "xilinx",
];

/// Everyday tools: editors and IDEs, trackers and chat, design and office suites, CI.
pub const TOOL_KEYWORDS: &[&str] = &[
    "vscode",
    "visual studio",
    "intellij",
    "pycharm",
    "eclipse",
    "github",
    "gitlab",
    "bitbucket",
    "jira",
    "confluence",
    "slack",
    "figma",
    "photoshop",
    "excel",
    "powerpoint",
    "postman",
    "jenkins",
    "jupyter",
];
