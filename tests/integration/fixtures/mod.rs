// Sample document bodies and database contents shared by integration tests

/// WordprocessingML body using the MAB / GEF abbreviations
pub const REPORT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:r><w:t xml:space="preserve">Binding of the monoclonal antibody (MAB) activates the </w:t></w:r>
<w:r><w:rPr><w:b/></w:rPr><w:t>guanine nucleotide exchange factor (GEF) pathway [12]</w:t></w:r></w:p>
<w:p><w:r><w:t>Several (GEFs) were observed in (12) samples.</w:t></w:r></w:p>
</w:body>
</w:document>"#;

/// ADAM-layout database covering the report abbreviations
pub const ADAM_DATABASE: &str = "# PREFERRED_SHORT_FORM\tPREFERRED_LONG_FORM\tSHORT_FORMS\tLONG_FORMS\tOCCURRENCES
GEF\tguanine nucleotide exchange factor\tGEF:812\tguanine nucleotide exchange factor:790|guanine-nucleotide exchange factor:22\t812
GEF\tgastric epithelial factor\tGEF:3\tgastric epithelial factor:3\t3
GEFS\tgeneralized epilepsy with febrile seizures\tGEFS:41\tgeneralized epilepsy with febrile seizures:41\t41
MAB\tMonoclonal Antibody
TNF\ttumor necrosis factor\tTNF:20000\ttumor necrosis factor:20000\t20000
";

/// Comma-separated glossary export
pub const GLOSSARY_DATABASE: &str = "MAB,monoclonal antibody
GEF,\"guanine nucleotide exchange factor\"
";
