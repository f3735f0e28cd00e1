// Dweve RULOG - Rule Logic Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Basic fact-table loading.
//!
//! Run with: `cargo run --example basic_usage -p rulog-facts`

use rulog_core::OperTable;
use rulog_facts::{load_facts, NoExpanders};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = "\
% parts inventory
part(symbol),qty(int),price(float),tags(list)
bolt,120,0.15,\"metal, m4\"
nut,,0.05,metal
washer,45,,\"\"
";

    let ops = OperTable::standard();
    load_facts(table, "inventory.csv", b',', &ops, &NoExpanders, |row, values| {
        let rendered: Vec<String> = values.iter().map(|v| v.display(&ops).to_string()).collect();
        println!("row {}: [{}]", row, rendered.join(", "));
    })?;

    Ok(())
}
