//! Common test utilities for building workflow export documents.

/// A minimal but complete export: one version header, one stage, one
/// activity and one unguarded self-transition.
#[allow(dead_code)]
pub fn minimal_workflow_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<unload>
  <wf_workflow_version>
    <sys_id>v1</sys_id>
    <name>Minimal</name>
    <table>incident</table>
    <active>true</active>
    <description>Smallest useful workflow</description>
    <start display_value="act1"/>
  </wf_workflow_version>
  <wf_stage>
    <sys_id>s1</sys_id>
    <name>Open</name>
    <value>open</value>
    <order>100</order>
  </wf_stage>
  <wf_activity>
    <sys_id>act1</sys_id>
    <name>Begin</name>
    <activity_definition display_value="Begin"/>
    <stage display_value="s1"/>
    <x>120</x>
    <y>80</y>
  </wf_activity>
  <wf_transition>
    <sys_id>t1</sys_id>
    <from display_value="act1"/>
    <to display_value="act1"/>
    <condition display_value=""/>
  </wf_transition>
</unload>"#
        .to_string()
}

/// A three-activity approval workflow with two stages, one guard condition
/// and a branch: approve moves on to Close, reject loops back to Begin.
#[allow(dead_code)]
pub fn approval_workflow_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<unload>
  <wf_workflow_version>
    <sys_id>v7</sys_id>
    <name>Change Approval</name>
    <table>change_request</table>
    <active>true</active>
    <description>Two stage change approval</description>
    <start display_value="act1"/>
  </wf_workflow_version>
  <wf_stage>
    <sys_id>s1</sys_id>
    <name>Triage</name>
    <value>triage</value>
    <order>100</order>
  </wf_stage>
  <wf_stage>
    <sys_id>s2</sys_id>
    <name>Resolution</name>
    <value>resolution</value>
    <order>200</order>
  </wf_stage>
  <wf_activity>
    <sys_id>act1</sys_id>
    <name>Begin</name>
    <activity_definition display_value="Begin"/>
    <stage display_value="s1"/>
    <x>100</x>
    <y>100</y>
  </wf_activity>
  <wf_activity>
    <sys_id>act2</sys_id>
    <name>Approve</name>
    <activity_definition display_value="Approval - User"/>
    <stage display_value="s1"/>
    <x>260</x>
    <y>100</y>
  </wf_activity>
  <wf_activity>
    <sys_id>act3</sys_id>
    <name>Close</name>
    <activity_definition display_value="End"/>
    <stage display_value="s2"/>
    <x>420</x>
    <y>100</y>
  </wf_activity>
  <wf_condition>
    <sys_id>c1</sys_id>
    <name>Approved</name>
    <activity display_value="act2"/>
    <condition>state == 'approved'</condition>
    <order>100</order>
  </wf_condition>
  <wf_transition>
    <sys_id>t1</sys_id>
    <from display_value="act1"/>
    <to display_value="act2"/>
    <condition display_value=""/>
  </wf_transition>
  <wf_transition>
    <sys_id>t2</sys_id>
    <from display_value="act2"/>
    <to display_value="act3"/>
    <condition display_value="c1"/>
  </wf_transition>
  <wf_transition>
    <sys_id>t3</sys_id>
    <from display_value="act2"/>
    <to display_value="act1"/>
    <condition display_value=""/>
  </wf_transition>
</unload>"#
        .to_string()
}

/// Wraps a version header with the given `active` text (or no `active`
/// element at all) in an otherwise empty export.
#[allow(dead_code)]
pub fn version_with_active(active_text: Option<&str>) -> String {
    let active = match active_text {
        Some(text) => format!("<active>{}</active>", text),
        None => String::new(),
    };
    format!(
        r#"<unload>
  <wf_workflow_version>
    <sys_id>v1</sys_id>
    <name>Flag Check</name>
    {}
  </wf_workflow_version>
</unload>"#,
        active
    )
}
