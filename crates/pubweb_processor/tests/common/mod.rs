/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use pubweb_core::reference::parse_bibtex;
use pubweb_core::Config;
use pubweb_processor::Processor;

/// A small bibliography in deliberately unsorted order.
pub const PUBLICATIONS_BIB: &str = r#"
@article{schaub2024,
  title = {Some Title},
  author = {Schaub, David Paul},
  journal = {Journal of Tests},
  volume = {1},
  number = {2},
  pages = {3-4},
  year = {2024},
  month = {March},
  doi = {10.1234/abcd}
}

@article{shared2025,
  title = {Paired Work on {RNA}},
  author = {Doe, Jane and Schaub, David Paul and Roe, Rick},
  journal = {Cell},
  year = {2025},
  month = {1},
  usera = {2}
}

@misc{preprint2024,
  title = {A Preprint},
  author = {Roe, Rick and Schaub, David},
  archiveprefix = {arXiv},
  year = {2024},
  month = {July},
  url = {https://arxiv.org/abs/2407.00001}
}

@book{undated,
  title = {Timeless Notes},
  author = {Doe, Jane},
  publisher = {Tiny Press}
}
"#;

pub const HOST_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
        <section id="publications">
            <h2>Publications</h2>
            <p>Loading...</p>
        </section>
</body>
</html>
"#;

pub fn processor(src: &str) -> Processor {
    let bib = parse_bibtex(src).expect("fixture should parse");
    Processor::new(bib, Config::default())
}
